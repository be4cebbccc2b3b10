use crate::config::Config;
use crate::core_network::network::Server;
use anyhow::Result;
use log::info;

/// Binds the control listener and runs the accept loop until shutdown.
pub async fn run(config: Config) -> Result<()> {
    let server = Server::bind(&config).await?;
    server.serve().await?;
    info!("Server stopped.");
    Ok(())
}
