//! Remote error responses and idempotency classification.

use serde::{Deserialize, Serialize};

/// Structured error body returned by the metadata endpoint on rejection.
///
/// All fields default to empty: the remote occasionally omits fields and a
/// partial body should still decode rather than being reported as malformed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorResponse {
    /// JSON path of the offending part of the request.
    pub path: String,
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: String,
}

impl ErrorResponse {
    /// Whether this rejection actually means the operation was already
    /// applied in a previous run.
    pub fn is_idempotent(&self) -> bool {
        IdempotencyCode::from_code(&self.code).is_some()
    }
}

/// Remote error codes that are equivalent to success.
///
/// The metadata endpoint rejects re-application of an operation that is
/// already in place; these codes identify that case so the whole sequence can
/// be re-run safely. Codes outside this set are treated as real failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdempotencyCode {
    /// The table is already tracked.
    AlreadyTracked,
    /// The relationship already exists.
    AlreadyExists,
}

impl IdempotencyCode {
    /// Classify a remote error code, if it is in the idempotency set.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "already-tracked" => Some(Self::AlreadyTracked),
            "already-exists" => Some(Self::AlreadyExists),
            _ => None,
        }
    }

    /// The wire representation of this code.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlreadyTracked => "already-tracked",
            Self::AlreadyExists => "already-exists",
        }
    }
}
