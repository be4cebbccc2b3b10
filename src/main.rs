use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env};
use log::info;
use std::io::Write;

use oxideftpd::config::Config;
use oxideftpd::core_cli::Cli;
use oxideftpd::server;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize the logger with a custom format
    Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = buf.timestamp();
            writeln!(
                buf,
                "[{}] [{}] {}",
                timestamp,
                record.level(),
                record.args()
            )
        })
        .init();

    let mut config = match args.config.as_deref() {
        Some(path) => Config::load_from_file(path)?,
        None => Config::default(),
    };

    // Command-line overrides take precedence over the file
    if let Some(host) = args.host {
        config.server.listen_host = host;
    }
    if let Some(port) = args.port {
        config.server.listen_port = port;
    }
    if let Some(root_dir) = args.root_dir {
        config.server.root_dir = root_dir;
    }

    info!("Starting server with config: {:?}", config);
    server::run(config).await
}
