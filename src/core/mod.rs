pub mod add;
pub mod calculator;
pub mod config;
pub mod log;
pub mod preview;
