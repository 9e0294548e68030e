//! The storage schema plan.
//!
//! Fixed at build time: track the two storage tables, then wire their
//! relationships. The user relationship comes last and is best-effort
//! because the `auth.users` table belongs to the optionally-deployed auth
//! subsystem; when storage runs standalone, that step failing must not fail
//! the bootstrap.

use graphmeta_client::{MetadataPlan, PlanStep};
use graphmeta_proto::{CustomRootFields, MetadataOperation, QualifiedTable, TableConfiguration};

/// Postgres schema holding the storage tables.
pub const STORAGE_SCHEMA: &str = "storage";

fn buckets_table() -> QualifiedTable {
    QualifiedTable::new(STORAGE_SCHEMA, "buckets")
}

fn files_table() -> QualifiedTable {
    QualifiedTable::new(STORAGE_SCHEMA, "files")
}

fn buckets_configuration() -> TableConfiguration {
    TableConfiguration::new(
        "buckets",
        CustomRootFields {
            select: "buckets".into(),
            select_by_pk: "bucket".into(),
            select_aggregate: "bucketsAggregate".into(),
            insert: "insertBuckets".into(),
            insert_one: "insertBucket".into(),
            update: "updateBuckets".into(),
            update_by_pk: "updateBucket".into(),
            delete: "deleteBuckets".into(),
            delete_by_pk: "deleteBucket".into(),
        },
    )
    .with_column("id", "id")
    .with_column("created_at", "createdAt")
    .with_column("updated_at", "updatedAt")
    .with_column("download_expiration", "downloadExpiration")
    .with_column("min_upload_file_size", "minUploadFileSize")
    .with_column("max_upload_file_size", "maxUploadFileSize")
    .with_column("cache_control", "cacheControl")
    .with_column("presigned_urls_enabled", "presignedUrlsEnabled")
}

fn files_configuration() -> TableConfiguration {
    TableConfiguration::new(
        "files",
        CustomRootFields {
            select: "files".into(),
            select_by_pk: "file".into(),
            select_aggregate: "filesAggregate".into(),
            insert: "insertFiles".into(),
            insert_one: "insertFile".into(),
            update: "updateFiles".into(),
            update_by_pk: "updateFile".into(),
            delete: "deleteFiles".into(),
            delete_by_pk: "deleteFile".into(),
        },
    )
    .with_column("id", "id")
    .with_column("created_at", "createdAt")
    .with_column("updated_at", "updatedAt")
    .with_column("bucket_id", "bucketId")
    .with_column("name", "name")
    .with_column("size", "size")
    .with_column("mime_type", "mimeType")
    .with_column("etag", "etag")
    .with_column("is_uploaded", "isUploaded")
    .with_column("uploaded_by_user_id", "uploadedByUserId")
}

/// Build the plan that exposes the storage tables over GraphQL.
///
/// Steps are in dependency order: both tables must be tracked before any
/// relationship referencing them is created.
pub fn storage_metadata_plan() -> MetadataPlan {
    MetadataPlan::new()
        .with_step(PlanStep::required(
            "buckets table",
            MetadataOperation::track_table(buckets_table(), buckets_configuration()),
        ))
        .with_step(PlanStep::required(
            "files table",
            MetadataOperation::track_table(files_table(), files_configuration()),
        ))
        .with_step(PlanStep::required(
            "files to buckets relationship",
            MetadataOperation::object_relationship(files_table(), "bucket", ["bucket_id"]),
        ))
        .with_step(PlanStep::required(
            "buckets to files relationship",
            MetadataOperation::array_relationship(
                buckets_table(),
                "files",
                files_table(),
                ["bucket_id"],
            ),
        ))
        .with_step(PlanStep::best_effort(
            "files to users relationship",
            MetadataOperation::object_relationship(
                files_table(),
                "uploadedByUser",
                ["uploaded_by_user_id"],
            ),
        ))
}
