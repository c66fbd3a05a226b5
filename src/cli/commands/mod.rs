pub mod calc;
pub mod config;
pub mod date;
pub mod goal;
pub mod init;
pub mod log;
pub mod reset;
pub mod show;
