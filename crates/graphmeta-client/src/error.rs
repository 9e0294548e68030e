//! Client error types.

use std::time::Duration;

use thiserror::Error;

use graphmeta_proto::ErrorResponse;

/// Submission errors.
///
/// An idempotent conflict (the remote reports the operation is already in
/// place) is not an error; it is normalized to
/// [`ApplyOutcome::AlreadyApplied`](crate::ApplyOutcome::AlreadyApplied).
#[derive(Debug, Error)]
pub enum Error {
    /// Operation payload could not be encoded. Not expected with the static,
    /// well-formed payloads this crate submits.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The request exceeded the configured timeout. No retry is attempted.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// Network-level failure talking to the endpoint.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The remote rejected the operation with a decodable error outside the
    /// idempotency set.
    #[error(
        "rejected by remote: status_code: {status}, code: {}, error: {}",
        .response.code,
        .response.error
    )]
    Rejected {
        status: u16,
        response: ErrorResponse,
    },

    /// The remote returned a non-success status with a body that is not the
    /// expected error shape. The raw body is carried verbatim for diagnosis.
    #[error("unexpected response: status_code: {status}, response: {body}")]
    UnexpectedResponse { status: u16, body: String },
}
