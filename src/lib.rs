/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 11/11/25
******************************************************************************/

//! # Session Client
//!
//! Minimal authenticated HTTP client for a single backend service that
//! keeps its session in cookies.
//!
//! The client handles:
//! - Initial login with JSON credentials (username, password, login domain)
//! - Transparent session refresh before every request
//! - Fallback re-login when the refresh is rejected
//! - GET/POST/PUT/DELETE dispatch with raw or JSON payloads
//!
//! Authentication state is never inspected by client code: the server sets
//! a session cookie, the transport's cookie store replays it, and a
//! rejected refresh is the only signal that the session has lapsed.
//!
//! ## Usage
//!
//! ```ignore
//! use session_client::prelude::*;
//!
//! let config = Config::with_credentials(
//!     "https://mgmt.example.com/api/v1",
//!     "admin",
//!     "secret",
//!     false,
//!     "corp",
//! );
//! let client = SessionClient::new(config)?;
//!
//! // Session handling is transparent; this refreshes first, then sends
//! let body = client.send("/widgets", Method::GET, &[], None).await?;
//! ```

/// Authentication payload model and the authenticator seam
pub mod auth;
/// Session client and request orchestration
pub mod client;
/// Configuration loaded from explicit values or the environment
pub mod config;
/// Endpoint paths and transport tuning constants
pub mod constants;
/// Error types
pub mod error;
/// Convenient re-exports of the most commonly used types
pub mod prelude;
/// Environment and logging utilities
pub mod utils;

/// Library version, taken from the Cargo manifest
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version string
pub fn version() -> &'static str {
    VERSION
}
