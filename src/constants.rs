/// Path of the login endpoint, relative to the configured base URL
pub const LOGIN_ENDPOINT: &str = "/login";
/// Path of the session refresh endpoint, relative to the configured base URL
pub const REFRESH_ENDPOINT: &str = "/refresh";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = "session-client/0.3.0";
/// Maximum number of idle connections kept per host in the transport pool
pub const MAX_IDLE_CONNECTIONS: usize = 10;
/// Seconds an idle pooled connection is kept before being closed
pub const IDLE_CONNECTION_TIMEOUT_SECS: u64 = 30;
