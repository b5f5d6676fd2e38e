/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 11/11/25
******************************************************************************/

//! Error types for the session client
//!
//! A single `AppError` enum covers every failure the client can surface:
//! transport failures, rejected verbs, non-success responses, body read
//! failures, plus conversions from the underlying serialization and I/O
//! error types.

use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport-level failure (DNS resolution, connection, TLS handshake)
    Network(reqwest::Error),
    /// HTTP verb not supported by this client
    InvalidMethod(String),
    /// Server answered outside the 2xx range; carries the raw response body
    ErrorResponse(String),
    /// Response body could not be read after a successful status
    ResponseRead,
    /// JSON serialization or deserialization failure
    Json(serde_json::Error),
    /// Underlying I/O failure
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::InvalidMethod(method) => write!(f, "invalid method {method}"),
            // message is the raw response body, nothing else
            AppError::ErrorResponse(body) => write!(f, "{body}"),
            AppError::ResponseRead => write!(f, "IO error, could not read from response"),
            AppError::Json(e) => write!(f, "serialization error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}
