use crate::config::Config;
use crate::constants::WELCOME_BANNER;
use crate::core_fs::view::FsView;
use crate::core_ftpcommand::handlers::{dispatch, SessionFlow};
use crate::session::{Session, SessionState};
use anyhow::{Context, Result};
use log::{debug, error, info};
use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::Mutex;

/// Control-port acceptor: owns the listening socket and the registry of live
/// sessions. Each accepted connection runs in its own task.
pub struct Server {
    listener: TcpListener,
    fs: Arc<FsView>,
    sessions: Arc<Mutex<HashSet<SocketAddr>>>,
}

impl Server {
    /// Opens the sandbox root and binds the control listener. Both failures
    /// are fatal at startup.
    pub async fn bind(config: &Config) -> Result<Self> {
        let fs = FsView::open(&config.server.root_dir)
            .with_context(|| format!("Failed to open sandbox root: {}", config.server.root_dir))?;
        let addr = format!("{}:{}", config.server.listen_host, config.server.listen_port);
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind control socket on {}", addr))?;
        info!("Server listening on {}", listener.local_addr()?);
        info!("Serving files from {}", fs.root().display());

        Ok(Self {
            listener,
            fs: Arc::new(fs),
            sessions: Arc::new(Mutex::new(HashSet::new())),
        })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept loop. A per-client accept error is logged and the loop keeps
    /// going; a Ctrl-C interrupt stops it and closes the listener, leaving
    /// in-flight sessions to finish or be cut off at process exit.
    pub async fn serve(self) -> Result<()> {
        loop {
            tokio::select! {
                accepted = self.listener.accept() => match accepted {
                    Ok((socket, addr)) => self.spawn_session(socket, addr).await,
                    Err(e) => error!("Failed to accept connection: {}", e),
                },
                _ = signal::ctrl_c() => {
                    info!("Interrupt received, stopping accept loop");
                    break;
                }
            }
        }

        let live = self.sessions.lock().await.len();
        if live > 0 {
            info!("Shutting down with {} session(s) still connected", live);
        }
        Ok(())
    }

    async fn spawn_session(&self, socket: TcpStream, addr: SocketAddr) {
        info!("New connection from {}", addr);
        self.sessions.lock().await.insert(addr);

        let fs = Arc::clone(&self.fs);
        let sessions = Arc::clone(&self.sessions);
        tokio::spawn(async move {
            if let Err(e) = handle_connection(socket, fs).await {
                error!("Connection error for {}: {}", addr, e);
            }
            sessions.lock().await.remove(&addr);
            info!("Connection closed for {}", addr);
        });
    }
}

/// Runs one session: welcome banner, then the command read-loop. The session
/// and its sockets are released on every exit path.
pub async fn handle_connection(socket: TcpStream, fs: Arc<FsView>) -> std::io::Result<()> {
    let local_ip = socket.local_addr()?.ip();
    let (read_half, mut write_half) = socket.into_split();
    let mut session = Session::new(fs, local_ip);

    write_half.write_all(WELCOME_BANNER.as_bytes()).await?;
    session.state = SessionState::Ready;

    let mut reader = BufReader::new(read_half);
    let result = session_loop(&mut reader, &mut write_half, &mut session).await;
    session.close();
    result
}

async fn session_loop(
    reader: &mut BufReader<OwnedReadHalf>,
    writer: &mut OwnedWriteHalf,
    session: &mut Session,
) -> std::io::Result<()> {
    let mut buffer = String::new();
    loop {
        buffer.clear();
        let n = reader.read_line(&mut buffer).await?;
        if n == 0 {
            debug!("Peer closed the control connection");
            return Ok(());
        }

        info!("Received command: {}", buffer.trim_end());
        match dispatch(writer, session, &buffer).await? {
            SessionFlow::Continue => {}
            SessionFlow::Quit => return Ok(()),
        }
    }
}
