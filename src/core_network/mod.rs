pub mod data_channel;
pub mod network;
pub mod pasv;
