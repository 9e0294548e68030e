//! End-to-end tests for the storage plan against a mock metadata endpoint.

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::json;

use graphmeta_cli::storage_metadata_plan;
use graphmeta_client::{ClientConfig, MetadataClient};

fn track_buckets_matcher() -> Matcher {
    Matcher::PartialJson(json!({
        "type": "pg_track_table",
        "args": {"table": {"schema": "storage", "name": "buckets"}},
    }))
}

fn track_files_matcher() -> Matcher {
    Matcher::PartialJson(json!({
        "type": "pg_track_table",
        "args": {"table": {"schema": "storage", "name": "files"}},
    }))
}

fn bucket_relationship_matcher() -> Matcher {
    Matcher::PartialJson(json!({
        "type": "pg_create_object_relationship",
        "args": {"name": "bucket"},
    }))
}

fn files_relationship_matcher() -> Matcher {
    Matcher::PartialJson(json!({"type": "pg_create_array_relationship"}))
}

fn user_relationship_matcher() -> Matcher {
    Matcher::PartialJson(json!({
        "type": "pg_create_object_relationship",
        "args": {"name": "uploadedByUser"},
    }))
}

async fn mock_ok(server: &mut ServerGuard, matcher: Matcher) -> Mock {
    server
        .mock("POST", "/metadata")
        .match_header("x-hasura-admin-secret", "test-secret")
        .match_body(matcher)
        .with_status(200)
        .expect(1)
        .create_async()
        .await
}

fn test_client(server: &ServerGuard) -> MetadataClient {
    MetadataClient::new(ClientConfig::new(server.url(), "test-secret")).unwrap()
}

#[tokio::test]
async fn test_applies_all_five_steps() {
    let mut server = Server::new_async().await;

    let buckets = mock_ok(&mut server, track_buckets_matcher()).await;
    let files = mock_ok(&mut server, track_files_matcher()).await;
    let bucket_rel = mock_ok(&mut server, bucket_relationship_matcher()).await;
    let files_rel = mock_ok(&mut server, files_relationship_matcher()).await;
    let user_rel = mock_ok(&mut server, user_relationship_matcher()).await;

    let report = storage_metadata_plan()
        .apply(&test_client(&server))
        .await
        .unwrap();

    buckets.assert_async().await;
    files.assert_async().await;
    bucket_rel.assert_async().await;
    files_rel.assert_async().await;
    user_rel.assert_async().await;

    assert_eq!(report.applied, 5);
    assert_eq!(report.already_in_place, 0);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn test_rerun_with_already_tracked_bucket_succeeds() {
    let mut server = Server::new_async().await;

    let buckets = server
        .mock("POST", "/metadata")
        .match_body(track_buckets_matcher())
        .with_status(400)
        .with_body(
            r#"{"path":"$.args","error":"view/table already tracked: \"buckets\"","code":"already-tracked"}"#,
        )
        .expect(1)
        .create_async()
        .await;
    let files = mock_ok(&mut server, track_files_matcher()).await;
    let bucket_rel = mock_ok(&mut server, bucket_relationship_matcher()).await;
    let files_rel = mock_ok(&mut server, files_relationship_matcher()).await;
    let user_rel = mock_ok(&mut server, user_relationship_matcher()).await;

    let report = storage_metadata_plan()
        .apply(&test_client(&server))
        .await
        .unwrap();

    buckets.assert_async().await;
    files.assert_async().await;
    bucket_rel.assert_async().await;
    files_rel.assert_async().await;
    user_rel.assert_async().await;

    assert_eq!(report.applied, 4);
    assert_eq!(report.already_in_place, 1);
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn test_files_tracking_failure_aborts_before_relationships() {
    let mut server = Server::new_async().await;

    let buckets = mock_ok(&mut server, track_buckets_matcher()).await;
    let files = server
        .mock("POST", "/metadata")
        .match_body(track_files_matcher())
        .with_status(500)
        .with_body(r#"{"path":"$.args","error":"postgres error","code":"unexpected"}"#)
        .expect(1)
        .create_async()
        .await;
    let bucket_rel = server
        .mock("POST", "/metadata")
        .match_body(bucket_relationship_matcher())
        .expect(0)
        .create_async()
        .await;
    let files_rel = server
        .mock("POST", "/metadata")
        .match_body(files_relationship_matcher())
        .expect(0)
        .create_async()
        .await;

    let err = storage_metadata_plan()
        .apply(&test_client(&server))
        .await
        .unwrap_err();

    buckets.assert_async().await;
    files.assert_async().await;
    bucket_rel.assert_async().await;
    files_rel.assert_async().await;

    assert!(err.to_string().contains("files table"));
    assert!(err.to_string().contains("unexpected"));
}

#[tokio::test]
async fn test_missing_users_table_only_warns() {
    let mut server = Server::new_async().await;

    let buckets = mock_ok(&mut server, track_buckets_matcher()).await;
    let files = mock_ok(&mut server, track_files_matcher()).await;
    let bucket_rel = mock_ok(&mut server, bucket_relationship_matcher()).await;
    let files_rel = mock_ok(&mut server, files_relationship_matcher()).await;
    let user_rel = server
        .mock("POST", "/metadata")
        .match_body(user_relationship_matcher())
        .with_status(500)
        .with_body(r#"{"path":"$.args","error":"table \"users\" does not exist","code":"not-exists"}"#)
        .expect(1)
        .create_async()
        .await;

    let report = storage_metadata_plan()
        .apply(&test_client(&server))
        .await
        .unwrap();

    buckets.assert_async().await;
    files.assert_async().await;
    bucket_rel.assert_async().await;
    files_rel.assert_async().await;
    user_rel.assert_async().await;

    assert_eq!(report.applied, 4);
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].contains("users"));
}
