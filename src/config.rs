use crate::utils::config::get_env_or_default;
use dotenv::dotenv;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Authentication credentials for the backend service
pub struct Credentials {
    /// Username for the account
    pub username: String,
    /// Password for the account
    pub password: String,
    /// Realm the login is scoped to in multi-tenant deployments
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Configuration for the REST API endpoint
pub struct RestApiConfig {
    /// Base URL of the backend service. Not validated; malformed values
    /// surface as request-time errors
    pub base_url: String,
    /// Accept any server certificate. Intended for self-signed or test
    /// endpoints only
    pub skip_tls_verify: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Main configuration for the session client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration instance from environment variables
    ///
    /// Explicitly loads a `.env` file when one is present. Missing
    /// credentials fall back to placeholder values and are reported
    /// through the logger.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("SESSION_USERNAME", String::from("default_username"));
        let password = get_env_or_default("SESSION_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if username == "default_username" {
            error!("SESSION_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("SESSION_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials {
                username,
                password,
                domain: get_env_or_default("SESSION_DOMAIN", String::new()),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "SESSION_BASE_URL",
                    String::from("https://localhost:8443/api/v1"),
                ),
                skip_tls_verify: get_env_or_default("SESSION_SKIP_TLS_VERIFY", false),
            },
        }
    }

    /// Creates a configuration from explicit values
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend service
    /// * `username` - Username for the account
    /// * `password` - Password for the account
    /// * `skip_tls_verify` - Accept any server certificate when `true`
    /// * `domain` - Login realm for multi-tenant deployments
    pub fn with_credentials(
        base_url: &str,
        username: &str,
        password: &str,
        skip_tls_verify: bool,
        domain: &str,
    ) -> Self {
        Config {
            credentials: Credentials {
                username: username.to_string(),
                password: password.to_string(),
                domain: domain.to_string(),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                skip_tls_verify,
            },
        }
    }
}
