//! Metadata submission engine.
//!
//! One operation per call, one HTTP round trip per operation. The engine
//! holds no state between calls; the remote metadata store is the sole
//! source of truth.

use reqwest::header::CONTENT_TYPE;

use graphmeta_proto::{ErrorResponse, MetadataOperation};

use crate::config::{ClientConfig, ADMIN_SECRET_HEADER, CONTENT_TYPE_JSON};
use crate::error::Error;

/// Result of submitting one operation. Both variants advance a plan; the
/// distinction only matters for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The remote accepted and applied the operation.
    Applied,
    /// The remote reported the operation as already in place from a previous
    /// run. Equivalent to success; this is what makes re-running a whole
    /// plan safe.
    AlreadyApplied,
}

/// A client for the Hasura metadata endpoint.
pub struct MetadataClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl MetadataClient {
    /// Build a client with the configured per-request timeout.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(Error::Transport)?;

        Ok(Self { http, config })
    }

    /// Submit a single operation and classify the response.
    ///
    /// A non-success status whose body decodes to an error in the
    /// idempotency set is normalized to [`ApplyOutcome::AlreadyApplied`];
    /// any other non-success response is an error carrying whatever detail
    /// the remote provided.
    pub async fn submit(&self, operation: &MetadataOperation) -> Result<ApplyOutcome, Error> {
        let payload = serde_json::to_vec(operation)?;

        let response = self
            .http
            .post(self.config.metadata_url())
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .header(ADMIN_SECRET_HEADER, &self.config.admin_secret)
            .body(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::Timeout(self.config.timeout)
                } else {
                    Error::Transport(e)
                }
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(ApplyOutcome::Applied);
        }

        let body = response.text().await.map_err(Error::Transport)?;
        match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(decoded) if decoded.is_idempotent() => {
                tracing::debug!(code = %decoded.code, "operation already in place");
                Ok(ApplyOutcome::AlreadyApplied)
            }
            Ok(decoded) => Err(Error::Rejected {
                status: status.as_u16(),
                response: decoded,
            }),
            Err(_) => Err(Error::UnexpectedResponse {
                status: status.as_u16(),
                body,
            }),
        }
    }
}

impl std::fmt::Debug for MetadataClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataClient")
            .field("endpoint", &self.config.endpoint)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}
