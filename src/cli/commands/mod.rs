pub mod add;
pub mod calc;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
