use crate::core_fs::view::FsView;
use crate::core_network::data_channel::DataChannel;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Lifecycle of a control connection: banner pending, serving commands,
/// terminated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SessionState {
    Connected,
    Ready,
    Closed,
}

/// Per-connection protocol state, owned by the connection's own task.
#[derive(Debug)]
pub struct Session {
    pub state: SessionState,
    /// Canonical absolute path; always inside the sandbox root.
    pub current_dir: PathBuf,
    pub data_channel: DataChannel,
    /// Address of the server side of the control connection, advertised by PASV.
    pub local_ip: IpAddr,
    pub fs: Arc<FsView>,
}

impl Session {
    pub fn new(fs: Arc<FsView>, local_ip: IpAddr) -> Self {
        let current_dir = fs.root().to_path_buf();
        Self {
            state: SessionState::Connected,
            current_dir,
            data_channel: DataChannel::new(),
            local_ip,
            fs,
        }
    }

    /// Releases the passive sockets and marks the session terminal.
    pub fn close(&mut self) {
        self.data_channel.close();
        self.state = SessionState::Closed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn new_session() -> (tempfile::TempDir, Session) {
        let dir = tempfile::tempdir().unwrap();
        let fs = Arc::new(FsView::open(dir.path()).unwrap());
        let session = Session::new(fs, IpAddr::V4(Ipv4Addr::LOCALHOST));
        (dir, session)
    }

    #[test]
    fn starts_at_the_sandbox_root() {
        let (_dir, session) = new_session();
        assert_eq!(session.state, SessionState::Connected);
        assert_eq!(session.current_dir, session.fs.root());
        assert!(session.data_channel.is_disabled());
    }

    #[test]
    fn close_is_terminal_and_releases_the_data_channel() {
        let (_dir, mut session) = new_session();
        session.close();
        assert_eq!(session.state, SessionState::Closed);
        assert!(session.data_channel.is_disabled());
        // Closing again is harmless.
        session.close();
        assert_eq!(session.state, SessionState::Closed);
    }
}
