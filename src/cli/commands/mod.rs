pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod mood;
pub mod next;
pub mod schedule;
pub mod vlog;
