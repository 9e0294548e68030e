//! Custom naming configuration for tracked tables.
//!
//! A tracked table exposes GraphQL root fields and column fields under
//! whatever names this configuration declares; nothing here is interpreted
//! locally, it is forwarded verbatim to the metadata store.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Custom names for the GraphQL root fields generated for a tracked table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomRootFields {
    pub select: String,
    pub select_by_pk: String,
    pub select_aggregate: String,
    pub insert: String,
    pub insert_one: String,
    pub update: String,
    pub update_by_pk: String,
    pub delete: String,
    pub delete_by_pk: String,
}

/// Naming configuration attached to a track-table operation.
///
/// Column names are kept in a `BTreeMap` so the serialized payload is
/// byte-for-byte deterministic regardless of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfiguration {
    /// Name the table is exposed under.
    pub custom_name: String,
    /// Custom names for the generated root fields.
    pub custom_root_fields: CustomRootFields,
    /// Mapping from intrinsic column names to exposed field names.
    pub custom_column_names: BTreeMap<String, String>,
}

impl TableConfiguration {
    /// Create a configuration with the given exposed name and root fields.
    pub fn new(custom_name: impl Into<String>, custom_root_fields: CustomRootFields) -> Self {
        Self {
            custom_name: custom_name.into(),
            custom_root_fields,
            custom_column_names: BTreeMap::new(),
        }
    }

    /// Expose a column under a custom field name.
    pub fn with_column(mut self, column: impl Into<String>, exposed: impl Into<String>) -> Self {
        self.custom_column_names
            .insert(column.into(), exposed.into());
        self
    }
}
