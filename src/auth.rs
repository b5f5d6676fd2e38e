/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 11/11/25
******************************************************************************/

//! Authentication model for the session client
//!
//! The session itself is carried entirely by the transport's cookie store;
//! this module only owns the login payload and the trait describing the
//! two operations that maintain the session.

use crate::config::Credentials;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Body of the login request
///
/// Serialized to JSON for the login call only and not retained afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRequest {
    /// Username for the account
    pub user_name: String,
    /// Password for the account
    pub user_passwd: String,
    /// Realm the login is scoped to in multi-tenant deployments
    pub domain: String,
}

impl AuthRequest {
    /// Builds the login payload from configured credentials
    pub fn new(credentials: &Credentials) -> Self {
        Self {
            user_name: credentials.username.clone(),
            user_passwd: credentials.password.clone(),
            domain: credentials.domain.clone(),
        }
    }
}

/// Trait for establishing and maintaining a server session
///
/// Both operations return the raw response body. The session token itself
/// is captured by the cookie store and never surfaced.
#[async_trait::async_trait]
pub trait Authenticator: Send + Sync {
    /// Logs in and acquires a fresh session cookie
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Raw body of the login response
    /// * `Err(AppError)` - If serialization or the underlying send fails
    async fn login(&self) -> Result<Vec<u8>, AppError>;

    /// Extends the current session using the cookie on file
    ///
    /// The server is expected to reject the call when no valid session
    /// cookie exists, which surfaces as an error.
    async fn refresh(&self) -> Result<Vec<u8>, AppError>;
}
