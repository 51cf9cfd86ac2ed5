use std::io;
use thiserror::Error;

/// Custom error types for the quickbin application
#[derive(Error, Debug)]
pub enum BinError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("platform not supported: {0}")]
    NotSupported(String),

    #[error("Windows API error: {0}")]
    WindowsError(String),

    #[error("tray error: {0}")]
    Tray(String),
}

/// Result type alias for quickbin error handling
pub type Result<T> = std::result::Result<T, BinError>;
