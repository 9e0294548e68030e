//! Graphmeta Client - applies declarative metadata to a Hasura endpoint.
//!
//! This crate provides the submission engine (one operation per HTTP round
//! trip, with idempotency-aware response classification) and the plan runner
//! that applies an ordered sequence of operations with a per-step
//! criticality policy.
//!
//! # Quick Start
//!
//! ```ignore
//! use graphmeta_client::{ClientConfig, MetadataClient, MetadataPlan, PlanStep};
//! use graphmeta_proto::{MetadataOperation, QualifiedTable};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MetadataClient::new(ClientConfig::new(
//!         "http://localhost:8080/v1",
//!         "admin-secret",
//!     ))?;
//!
//!     let plan = MetadataPlan::new().with_step(PlanStep::required(
//!         "files to buckets relationship",
//!         MetadataOperation::object_relationship(
//!             QualifiedTable::new("storage", "files"),
//!             "bucket",
//!             ["bucket_id"],
//!         ),
//!     ));
//!
//!     let report = plan.apply(&client).await?;
//!     println!("{} step(s) applied", report.applied);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod plan;

pub use client::{ApplyOutcome, MetadataClient};
pub use config::ClientConfig;
pub use error::Error;
pub use plan::{ApplyError, ApplyReport, Criticality, MetadataPlan, PlanStep};

/// Re-export protocol types.
pub use graphmeta_proto as proto;
