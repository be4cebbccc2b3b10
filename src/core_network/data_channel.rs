use log::debug;
use std::io;
use std::net::{IpAddr, SocketAddr};
use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

/// Passive-mode socket pair of one session.
///
/// Invariant: at most one live listener/data-socket pair at any time; opening
/// a new passive listener always tears down the previous pair first.
#[derive(Debug)]
enum PassiveState {
    Disabled,
    Listening(TcpListener),
    DataChannelOpen(TcpListener, TcpStream),
}

#[derive(Debug)]
pub struct DataChannel {
    state: PassiveState,
}

impl DataChannel {
    pub fn new() -> Self {
        Self {
            state: PassiveState::Disabled,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, PassiveState::Disabled)
    }

    /// Binds a fresh listener on an ephemeral port and returns its address.
    pub async fn open_passive(&mut self, bind_ip: IpAddr) -> io::Result<SocketAddr> {
        self.close();
        let listener = TcpListener::bind((bind_ip, 0)).await?;
        let addr = listener.local_addr()?;
        debug!("Passive listener bound on {}", addr);
        self.state = PassiveState::Listening(listener);
        Ok(addr)
    }

    /// Blocks until the single data connection this passive round entitles
    /// the client to has arrived.
    pub async fn accept_once(&mut self) -> io::Result<()> {
        match std::mem::replace(&mut self.state, PassiveState::Disabled) {
            PassiveState::Listening(listener) => {
                let (stream, peer) = listener.accept().await?;
                debug!("Data connection accepted from {}", peer);
                self.state = PassiveState::DataChannelOpen(listener, stream);
                Ok(())
            }
            state => {
                self.state = state;
                Err(io::Error::new(
                    io::ErrorKind::NotConnected,
                    "no passive listener to accept on",
                ))
            }
        }
    }

    /// Writes the whole payload to the accepted data socket.
    pub async fn transfer(&mut self, payload: &[u8]) -> io::Result<()> {
        match &mut self.state {
            PassiveState::DataChannelOpen(_, stream) => {
                stream.write_all(payload).await?;
                Ok(())
            }
            _ => Err(io::Error::new(
                io::ErrorKind::NotConnected,
                "data channel is not open",
            )),
        }
    }

    /// Drops the listener and data socket, if any. Safe to call repeatedly.
    pub fn close(&mut self) {
        if !self.is_disabled() {
            debug!("Data channel closed");
        }
        self.state = PassiveState::Disabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn passive_lifecycle_transfers_one_payload() {
        let mut channel = DataChannel::new();
        assert!(channel.is_disabled());

        let addr = channel
            .open_passive(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .unwrap();
        assert!(!channel.is_disabled());

        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        channel.accept_once().await.unwrap();
        channel.transfer(b"payload bytes").await.unwrap();
        channel.close();
        assert!(channel.is_disabled());

        assert_eq!(client.await.unwrap(), b"payload bytes");
    }

    #[tokio::test]
    async fn accept_and_transfer_require_an_open_channel() {
        let mut channel = DataChannel::new();
        assert!(channel.accept_once().await.is_err());
        assert!(channel.transfer(b"x").await.is_err());
        // Still safe to close with nothing open.
        channel.close();
        assert!(channel.is_disabled());
    }

    #[tokio::test]
    async fn reopening_passive_discards_the_stale_listener() {
        let mut channel = DataChannel::new();
        channel
            .open_passive(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .unwrap();
        let second = channel
            .open_passive(IpAddr::V4(Ipv4Addr::LOCALHOST))
            .await
            .unwrap();

        // The replacement listener is the live one.
        let client = tokio::spawn(async move {
            let mut stream = TcpStream::connect(second).await.unwrap();
            let mut received = Vec::new();
            stream.read_to_end(&mut received).await.unwrap();
            received
        });

        channel.accept_once().await.unwrap();
        channel.transfer(b"second round").await.unwrap();
        channel.close();

        assert_eq!(client.await.unwrap(), b"second round");
    }
}
