/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 12/11/25
******************************************************************************/

//! Session client for a cookie-authenticated backend API
//!
//! This module provides a client that handles:
//! - Initial login against the login endpoint
//! - Transparent session refresh before each request
//! - Fallback re-login when the refresh is rejected
//!
//! # Example
//! ```ignore
//! use session_client::client::SessionClient;
//! use session_client::config::Config;
//! use reqwest::Method;
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

use crate::auth::{AuthRequest, Authenticator};
use crate::config::Config;
use crate::constants::{
    IDLE_CONNECTION_TIMEOUT_SECS, LOGIN_ENDPOINT, MAX_IDLE_CONNECTIONS, REFRESH_ENDPOINT,
    USER_AGENT,
};
use crate::error::AppError;
use reqwest::Client as HttpClient;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Client for a session-cookie authenticated backend service
///
/// The session token lives entirely in the transport's cookie store: it is
/// captured from the login and refresh responses and replayed on every
/// subsequent request. Each instance owns its transport and cookie store;
/// session state is never shared across instances.
pub struct SessionClient {
    config: Arc<Config>,
    http_client: HttpClient,
    /// Serializes the refresh-then-login fallback across concurrent sends
    auth_guard: Mutex<()>,
}

impl SessionClient {
    /// Creates a new client
    ///
    /// Allocates a fresh cookie store and a pooled transport. No network
    /// I/O happens here; a session is only established once a request is
    /// sent.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(SessionClient)` - Ready-to-use client
    /// * `Err(AppError)` - If the transport could not be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .cookie_store(true)
            .danger_accept_invalid_certs(config.rest_api.skip_tls_verify)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS)
            .pool_idle_timeout(Duration::from_secs(IDLE_CONNECTION_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            config,
            http_client,
            auth_guard: Mutex::new(()),
        })
    }

    /// Returns the configured base URL
    pub fn base_url(&self) -> &str {
        &self.config.rest_api.base_url
    }

    /// Returns the configured username
    pub fn username(&self) -> &str {
        &self.config.credentials.username
    }

    /// Sends a request to the backend, keeping the session alive first
    ///
    /// For any endpoint other than login/refresh the client first attempts
    /// a session refresh and, if that is rejected, a best-effort re-login.
    /// The primary request is then sent regardless of the fallback outcome;
    /// only the primary request's own result is surfaced.
    ///
    /// # Arguments
    /// * `endpoint` - Path appended to the base URL (e.g. "/widgets")
    /// * `method` - One of GET, POST, PUT or DELETE
    /// * `payload` - Request body bytes; ignored for GET
    /// * `content_type` - Optional Content-Type header value
    ///
    /// # Returns
    /// * `Ok(Vec<u8>)` - Body of a 2xx response
    /// * `Err(AppError)` - Rejected verb, transport failure, non-2xx
    ///   response (carrying the response body as its message) or a failed
    ///   body read
    pub async fn send(
        &self,
        endpoint: &str,
        method: Method,
        payload: &[u8],
        content_type: Option<&str>,
    ) -> Result<Vec<u8>, AppError> {
        // Reject unsupported verbs before any network activity
        if !matches!(method.as_str(), "GET" | "POST" | "PUT" | "DELETE") {
            return Err(AppError::InvalidMethod(method.to_string()));
        }

        // Refresh the session before the primary request; the login and
        // refresh calls themselves are exempt
        if endpoint != REFRESH_ENDPOINT && endpoint != LOGIN_ENDPOINT {
            self.ensure_session().await;
        }

        let url = format!("{}{}", self.config.rest_api.base_url, endpoint);
        debug!("{} {}", method, url);

        let response = match method.as_str() {
            "GET" => self.http_client.get(&url).send().await?,
            "POST" => {
                let mut request = self.http_client.post(&url).body(payload.to_vec());
                if let Some(ct) = content_type {
                    request = request.header(CONTENT_TYPE, ct);
                }
                request.send().await?
            }
            // PUT and DELETE build the request explicitly so the optional
            // content type can be attached
            _ => {
                let mut request = self
                    .http_client
                    .request(method.clone(), &url)
                    .body(payload.to_vec());
                if let Some(ct) = content_type {
                    request = request.header(CONTENT_TYPE, ct);
                }
                request.send().await?
            }
        };

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ErrorResponse(body));
        }

        let body = response.bytes().await.map_err(|_| AppError::ResponseRead)?;
        Ok(body.to_vec())
    }

    /// Best-effort re-authentication ahead of a primary request
    ///
    /// A failed refresh triggers a single re-login attempt whose outcome
    /// is logged but not surfaced; the primary request proceeds either
    /// way. The guard serializes concurrent re-authentication attempts on
    /// the shared cookie store.
    async fn ensure_session(&self) {
        let _guard = self.auth_guard.lock().await;

        if let Err(e) = self.refresh().await {
            warn!("Session refresh failed ({e}), attempting re-login");
            match self.login().await {
                Ok(_) => debug!("Re-login succeeded"),
                Err(e) => warn!("Re-login failed: {e}"),
            }
        }
    }
}

#[async_trait::async_trait]
impl Authenticator for SessionClient {
    async fn login(&self) -> Result<Vec<u8>, AppError> {
        let payload = serde_json::to_vec(&AuthRequest::new(&self.config.credentials))?;
        self.send(
            LOGIN_ENDPOINT,
            Method::POST,
            &payload,
            Some("application/json"),
        )
        .await
    }

    async fn refresh(&self) -> Result<Vec<u8>, AppError> {
        self.send(REFRESH_ENDPOINT, Method::POST, &[], None).await
    }
}
