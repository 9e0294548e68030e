//! Qualified table identity.

use serde::{Deserialize, Serialize};

/// A table in the backing Postgres store, identified by schema and name.
///
/// Immutable once constructed; empty names are a caller contract and are not
/// validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualifiedTable {
    /// Schema the table lives in (e.g. "storage").
    pub schema: String,
    /// Table name within the schema.
    pub name: String,
}

impl QualifiedTable {
    /// Create a new qualified table identity.
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for QualifiedTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.schema, self.name)
    }
}
