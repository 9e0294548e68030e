//! Client configuration.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Header carrying the admin credential.
pub const ADMIN_SECRET_HEADER: &str = "X-Hasura-admin-secret";

/// Content type sent with every metadata request.
pub const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF-8";

/// Metadata client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the Hasura endpoint (e.g. "http://localhost:8080/v1").
    pub endpoint: String,

    /// Admin secret attached to every request.
    pub admin_secret: String,

    /// Per-request timeout. There is no overall deadline across a plan.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration for the given endpoint and credential.
    pub fn new(endpoint: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            admin_secret: admin_secret.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// URL of the metadata endpoint.
    pub fn metadata_url(&self) -> String {
        format!("{}/metadata", self.endpoint.trim_end_matches('/'))
    }
}
