/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! # Session Client Prelude
//!
//! This module provides a convenient way to import the most commonly used
//! types and traits from the library.
//!
//! ## Usage
//!
//! ```rust
//! use session_client::prelude::*;
//!
//! // Now you have access to all the commonly used types and traits
//! let config = Config::with_credentials("https://example.com", "user", "pass", false, "");
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the session client
pub use crate::config::{Config, Credentials, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND AUTHENTICATION
// ============================================================================

/// Session-cookie authenticated client
pub use crate::client::SessionClient;

/// Login payload and authenticator trait
pub use crate::auth::{AuthRequest, Authenticator};

// ============================================================================
// UTILITIES
// ============================================================================

/// Environment variable helpers
pub use crate::utils::config::{get_env_or_default, get_env_or_none};

/// Logging utilities
pub use crate::utils::logger::setup_logger;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};
