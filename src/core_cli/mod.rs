use clap::Parser;

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(name = "oxideftpd", about = "A minimal read-only FTP server written in Rust.")]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address, overriding the configuration file
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port, overriding the configuration file
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Sandbox root directory, overriding the configuration file
    #[arg(short, long)]
    pub root_dir: Option<String>,
}
