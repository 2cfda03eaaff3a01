pub mod config;
pub mod init;
pub mod log;
pub mod menu;
