//! Unified application error type.
//! Every module (store, core, cli, config) returns AppError so that main()
//! can report all failures the same way.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Usage
    // ---------------------------
    #[error("Cannot clock both in and out")]
    ConflictingFlags,

    // ---------------------------
    // Punch state
    // ---------------------------
    #[error("Already clocked in since {0}")]
    AlreadyClockedIn(String),

    #[error("Not clocked in")]
    NotClockedIn,

    #[error("Invalid log: {0}")]
    InvalidLog(String),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Store file not found: {}", .0.display())]
    StoreMissing(PathBuf),

    #[error("Failed to lock store file {}: {source}", .path.display())]
    Lock { path: PathBuf, source: io::Error },

    #[error("Corrupt store file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

pub type AppResult<T> = Result<T, AppError>;
