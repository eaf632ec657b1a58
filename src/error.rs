// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for masklog
//!
//! Transport failures are passed through to the caller untouched; body and
//! decode failures carry enough context to be logged before they are
//! re-raised.

use thiserror::Error;

/// Result type alias for masklog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for masklog
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP request failed inside the reqwest transport
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a custom transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Reading the response body stream failed
    #[error("Body read error: {0}")]
    BodyRead(String),

    /// Single-read body was requested twice or after close
    #[error("Response body already consumed")]
    BodyConsumed,

    /// Body bytes are not valid UTF-8
    #[error("Decode error: {0}")]
    Decode(#[from] std::str::Utf8Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration document could not be parsed
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a transport error
    pub fn transport<S: Into<String>>(msg: S) -> Self {
        Error::Transport(msg.into())
    }

    /// Create a body read error
    pub fn body_read<S: Into<String>>(msg: S) -> Self {
        Error::BodyRead(msg.into())
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this error came from the transport
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Http(_) | Error::Transport(_))
    }

    /// Check if this error happened while reading a body
    pub fn is_body_read(&self) -> bool {
        matches!(self, Error::BodyRead(_) | Error::BodyConsumed)
    }
}

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add operation context, turning the error into a configuration error
    fn config_context(self, msg: &str) -> Result<T>;
}

impl<T, E: Into<Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn config_context(self, msg: &str) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            Error::Config(format!("{}: {}", msg, err))
        })
    }
}
