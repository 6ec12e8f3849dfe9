//! Unified application error type.
//! Every module (storage, core, export, cli) returns AppError so the binary
//! has a single place where failures are reported.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid mood score: {0} (expected 1..=5)")]
    InvalidScore(u8),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid collection schedule: {0}")]
    InvalidSchedule(String),

    #[error("Video clip not found: {}", .0.display())]
    ClipNotFound(PathBuf),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / collaborators
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Notification error: {0}")]
    Notification(String),
}

pub type AppResult<T> = Result<T, AppError>;
