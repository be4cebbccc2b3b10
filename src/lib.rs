//! A minimal read-only FTP server: one control connection per client, with
//! passive-mode data channels for directory listings and file downloads.

pub mod config;
pub mod constants;
pub mod core_cli;
pub mod core_fs;
pub mod core_ftpcommand;
pub mod core_network;
pub mod helpers;
pub mod server;
pub mod session;
