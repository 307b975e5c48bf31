extern crate thiserror;

use std::io;

use grammr::AlignError;
use thiserror::Error;

/// Error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Io(#[from] IoError),

    #[error("HTTP Error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend Error: {endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Alignment Error: {0}")]
    Align(#[from] AlignError),

    #[error("Input Error: {0}")]
    Input(String),
}

impl Error {
    #[inline]
    pub fn config(error: ConfigError) -> Self {
        Self::Config(error)
    }

    #[inline]
    pub fn input<S: Into<String>>(message: S) -> Self {
        Self::Input(message.into())
    }
}

/// Configuration error.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("File I/O Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader I/O Error: {0}")]
    Reader(io::ErrorKind),

    #[error("Serialization Error: {0}")]
    Serialization(String),

    #[error("Invalid Backend Host: {0:?}")]
    Host(String),

    #[error("Invalid Timeout: must be at least one second")]
    Timeout,
}

/// I/O errors.
#[derive(Debug, Error, PartialEq)]
pub enum IoError {
    #[error("File Error: {0}")]
    File(io::ErrorKind),

    #[error("Reader Error: {0}")]
    Reader(io::ErrorKind),
}
