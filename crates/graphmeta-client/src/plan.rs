//! Metadata plans - ordered operation sequences with a criticality policy.
//!
//! A plan is an explicit, inspectable list of steps built once at startup.
//! Steps are applied strictly in order, one blocking round trip at a time:
//! a table must be tracked before a relationship referencing it is created,
//! and that ordering is the plan author's contract, not something the runner
//! verifies.

use thiserror::Error;

use graphmeta_proto::MetadataOperation;

use crate::client::{ApplyOutcome, MetadataClient};
use crate::error::Error;

/// How a step's failure affects the rest of the plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// Failure aborts the plan immediately; later steps are never submitted.
    Required,
    /// Failure is logged as a warning and the plan continues. Used for steps
    /// targeting optionally-deployed subsystems; note that a present but
    /// broken target also only warns.
    BestEffort,
}

/// One step of a plan: a labelled operation with its criticality.
#[derive(Debug, Clone)]
pub struct PlanStep {
    label: String,
    operation: MetadataOperation,
    criticality: Criticality,
}

impl PlanStep {
    /// A step whose failure aborts the plan.
    pub fn required(label: impl Into<String>, operation: MetadataOperation) -> Self {
        Self {
            label: label.into(),
            operation,
            criticality: Criticality::Required,
        }
    }

    /// A step whose failure is tolerated.
    pub fn best_effort(label: impl Into<String>, operation: MetadataOperation) -> Self {
        Self {
            label: label.into(),
            operation,
            criticality: Criticality::BestEffort,
        }
    }

    /// Diagnostic label naming what the step targets.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The operation this step submits.
    pub fn operation(&self) -> &MetadataOperation {
        &self.operation
    }

    /// The step's criticality.
    pub fn criticality(&self) -> Criticality {
        self.criticality
    }
}

/// Failure of a required step, identifying which one.
#[derive(Debug, Error)]
#[error("problem applying metadata for the {step}: {source}")]
pub struct ApplyError {
    /// Label of the failed step.
    pub step: String,
    /// The underlying submission error.
    #[source]
    pub source: Error,
}

/// Summary of a completed plan run.
#[derive(Debug, Default)]
pub struct ApplyReport {
    /// Steps the remote newly applied.
    pub applied: usize,
    /// Steps the remote reported as already in place.
    pub already_in_place: usize,
    /// Warnings recorded for failed best-effort steps.
    pub warnings: Vec<String>,
}

/// An ordered sequence of metadata operations.
#[derive(Debug, Default)]
pub struct MetadataPlan {
    steps: Vec<PlanStep>,
}

impl MetadataPlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a step.
    pub fn with_step(mut self, step: PlanStep) -> Self {
        self.steps.push(step);
        self
    }

    /// The steps in application order.
    pub fn steps(&self) -> &[PlanStep] {
        &self.steps
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the plan has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in order.
    ///
    /// A required step's failure aborts the run and surfaces as an
    /// [`ApplyError`] naming the step; nothing after it is submitted, and no
    /// partial success is reported. A best-effort step's failure is logged
    /// at WARN, recorded in the report, and the run continues. Because every
    /// operation is idempotent at the remote end, a plan can be re-applied
    /// on every startup.
    pub async fn apply(&self, client: &MetadataClient) -> Result<ApplyReport, ApplyError> {
        let mut report = ApplyReport::default();

        for step in &self.steps {
            match client.submit(step.operation()).await {
                Ok(ApplyOutcome::Applied) => {
                    tracing::debug!(step = %step.label, "metadata applied");
                    report.applied += 1;
                }
                Ok(ApplyOutcome::AlreadyApplied) => {
                    tracing::debug!(step = %step.label, "metadata already in place");
                    report.already_in_place += 1;
                }
                Err(source) => match step.criticality {
                    Criticality::Required => {
                        return Err(ApplyError {
                            step: step.label.clone(),
                            source,
                        });
                    }
                    Criticality::BestEffort => {
                        tracing::warn!(
                            step = %step.label,
                            error = %source,
                            "skipping optional metadata step"
                        );
                        report
                            .warnings
                            .push(format!("problem applying metadata for the {}: {}", step.label, source));
                    }
                },
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ClientConfig;
    use graphmeta_proto::QualifiedTable;

    fn relationship_step(name: &str) -> MetadataOperation {
        MetadataOperation::object_relationship(
            QualifiedTable::new("storage", "files"),
            name,
            ["bucket_id"],
        )
    }

    fn test_client(endpoint: &str) -> MetadataClient {
        MetadataClient::new(ClientConfig::new(endpoint, "test-secret")).unwrap()
    }

    #[test]
    fn test_plan_is_inspectable() {
        let plan = MetadataPlan::new()
            .with_step(PlanStep::required("files table", relationship_step("bucket")))
            .with_step(PlanStep::best_effort(
                "files to users relationship",
                relationship_step("uploadedByUser"),
            ));

        assert_eq!(plan.len(), 2);
        assert_eq!(plan.steps()[0].label(), "files table");
        assert_eq!(plan.steps()[0].criticality(), Criticality::Required);
        assert_eq!(plan.steps()[1].criticality(), Criticality::BestEffort);
    }

    #[tokio::test]
    async fn test_required_failure_aborts() {
        let mut server = mockito::Server::new_async().await;
        let first = server
            .mock("POST", "/metadata")
            .with_status(500)
            .with_body(r#"{"path":"$","error":"boom","code":"unexpected"}"#)
            .expect(1)
            .create_async()
            .await;

        let plan = MetadataPlan::new()
            .with_step(PlanStep::required("files table", relationship_step("bucket")))
            .with_step(PlanStep::required(
                "buckets to files relationship",
                relationship_step("files"),
            ));

        let err = plan.apply(&test_client(&server.url())).await.unwrap_err();

        // The abort edge: the second step is never submitted.
        first.assert_async().await;
        assert_eq!(err.step, "files table");
        assert!(err.to_string().contains("files table"));
    }

    #[tokio::test]
    async fn test_best_effort_failure_continues() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/metadata")
            .with_status(500)
            .with_body(r#"{"path":"$","error":"table not found","code":"not-exists"}"#)
            .expect(2)
            .create_async()
            .await;

        let plan = MetadataPlan::new()
            .with_step(PlanStep::best_effort(
                "files to users relationship",
                relationship_step("uploadedByUser"),
            ))
            .with_step(PlanStep::best_effort(
                "files to groups relationship",
                relationship_step("group"),
            ));

        let report = plan.apply(&test_client(&server.url())).await.unwrap();

        assert_eq!(report.applied, 0);
        assert_eq!(report.warnings.len(), 2);
        assert!(report.warnings[0].contains("users"));
    }

    #[tokio::test]
    async fn test_mixed_outcomes_counted() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/metadata")
            .with_status(400)
            .with_body(r#"{"path":"$","error":"already exists","code":"already-exists"}"#)
            .expect(1)
            .create_async()
            .await;

        let plan = MetadataPlan::new().with_step(PlanStep::required(
            "files to buckets relationship",
            relationship_step("bucket"),
        ));

        let report = plan.apply(&test_client(&server.url())).await.unwrap();
        assert_eq!(report.applied, 0);
        assert_eq!(report.already_in_place, 1);
        assert!(report.warnings.is_empty());
    }
}
