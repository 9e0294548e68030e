//! Metadata operations.
//!
//! Each operation serializes to the `{"type": ..., "args": ...}` envelope the
//! metadata endpoint expects. The set is extensible; only the operations the
//! storage bootstrap needs are defined.

use serde::{Deserialize, Serialize};

use crate::configuration::TableConfiguration;
use crate::table::QualifiedTable;

/// Name of the metadata source the operations target.
pub const DEFAULT_SOURCE: &str = "default";

/// A single declarative metadata operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "args")]
pub enum MetadataOperation {
    /// Track a Postgres table, exposing it under custom GraphQL names.
    #[serde(rename = "pg_track_table")]
    TrackTable(TrackTableArgs),
    /// Create a many-to-one relationship via a local foreign key.
    #[serde(rename = "pg_create_object_relationship")]
    CreateObjectRelationship(ObjectRelationshipArgs),
    /// Create a one-to-many relationship via a foreign key on the remote table.
    #[serde(rename = "pg_create_array_relationship")]
    CreateArrayRelationship(ArrayRelationshipArgs),
}

/// Arguments for tracking a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackTableArgs {
    pub source: String,
    pub table: QualifiedTable,
    pub configuration: TableConfiguration,
}

/// Arguments for creating an object relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRelationshipArgs {
    pub table: QualifiedTable,
    pub name: String,
    pub source: String,
    pub using: ObjectRelationshipUsing,
}

/// Foreign-key linkage for an object relationship: columns on the owning table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectRelationshipUsing {
    pub foreign_key_constraint_on: Vec<String>,
}

/// Arguments for creating an array relationship.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayRelationshipArgs {
    pub table: QualifiedTable,
    pub name: String,
    pub source: String,
    pub using: ArrayRelationshipUsing,
}

/// Foreign-key linkage for an array relationship: columns on the remote table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArrayRelationshipUsing {
    pub foreign_key_constraint_on: RemoteForeignKey,
}

/// A foreign key on a remote table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteForeignKey {
    pub table: QualifiedTable,
    pub columns: Vec<String>,
}

impl MetadataOperation {
    /// Track `table` with the given naming configuration.
    pub fn track_table(table: QualifiedTable, configuration: TableConfiguration) -> Self {
        Self::TrackTable(TrackTableArgs {
            source: DEFAULT_SOURCE.to_string(),
            table,
            configuration,
        })
    }

    /// Create an object relationship named `name` on `table`, established by
    /// the given foreign-key columns of `table` itself.
    pub fn object_relationship(
        table: QualifiedTable,
        name: impl Into<String>,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::CreateObjectRelationship(ObjectRelationshipArgs {
            table,
            name: name.into(),
            source: DEFAULT_SOURCE.to_string(),
            using: ObjectRelationshipUsing {
                foreign_key_constraint_on: columns.into_iter().map(Into::into).collect(),
            },
        })
    }

    /// Create an array relationship named `name` on `table`, established by
    /// the given foreign-key columns of `remote_table`.
    pub fn array_relationship(
        table: QualifiedTable,
        name: impl Into<String>,
        remote_table: QualifiedTable,
        columns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self::CreateArrayRelationship(ArrayRelationshipArgs {
            table,
            name: name.into(),
            source: DEFAULT_SOURCE.to_string(),
            using: ArrayRelationshipUsing {
                foreign_key_constraint_on: RemoteForeignKey {
                    table: remote_table,
                    columns: columns.into_iter().map(Into::into).collect(),
                },
            },
        })
    }
}
