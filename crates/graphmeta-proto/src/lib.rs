//! Graphmeta protocol types.
//!
//! This crate defines the request bodies accepted by the Hasura metadata
//! endpoint (`POST {base_url}/metadata`) and the structured error shape it
//! returns on rejection.
//!
//! # Modules
//!
//! - [`table`] - Qualified table identity
//! - [`configuration`] - Custom naming for tracked tables
//! - [`operation`] - The metadata operations themselves
//! - [`response`] - Remote error responses and idempotency classification
//!
//! # Serialization
//!
//! All request types derive `serde::Serialize` and produce the exact wire
//! shape the metadata API expects. Construction is pure: the same inputs
//! always serialize to the same bytes (column maps are ordered), so payloads
//! can be golden-tested.
//!
//! ```
//! use graphmeta_proto::{MetadataOperation, QualifiedTable};
//!
//! let op = MetadataOperation::object_relationship(
//!     QualifiedTable::new("storage", "files"),
//!     "bucket",
//!     ["bucket_id"],
//! );
//! ```

pub mod configuration;
pub mod operation;
pub mod response;
pub mod table;

// Re-export commonly used types at crate root
pub use configuration::{CustomRootFields, TableConfiguration};
pub use operation::{
    ArrayRelationshipArgs, ArrayRelationshipUsing, MetadataOperation, ObjectRelationshipArgs,
    ObjectRelationshipUsing, RemoteForeignKey, TrackTableArgs, DEFAULT_SOURCE,
};
pub use response::{ErrorResponse, IdempotencyCode};
pub use table::QualifiedTable;
