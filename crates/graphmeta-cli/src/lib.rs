//! Graphmeta CLI library.
//!
//! Exposes the fixed storage-schema plan and the binary's configuration so
//! both can be exercised by tests.

pub mod config;
pub mod schema;

pub use config::{Args, CliConfig};
pub use schema::storage_metadata_plan;
