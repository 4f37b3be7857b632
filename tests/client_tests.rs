//! Integration tests with a mocked projects API.
//!
//! Exercises every network operation against a wiremock server, plus the
//! mock-file fallback and the unconfigured-write preflight, without real I/O.
use project_client::errors::ClientError;
use project_client::models::ProcessingState;
use project_client::{Config, ProjectClient};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ProjectClient {
    ProjectClient::new(Config::with_base(server.uri())).unwrap()
}

#[tokio::test]
async fn list_returns_bare_array_as_is() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        { "projectId": "p-1", "title": "Alpha" },
        { "projectId": "p-2", "title": "Beta" }
    ]);

    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let projects = client_for(&mock_server).list_projects().await.unwrap();

    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].project_id.as_deref(), Some("p-1"));
    assert_eq!(projects[1].title.as_deref(), Some("Beta"));
}

#[tokio::test]
async fn list_unwraps_items_envelope() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [ { "title": "Alpha" }, { "title": "Beta" } ]
    });

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let projects = client_for(&mock_server).list_projects().await.unwrap();
    assert_eq!(projects.len(), 2);
}

#[tokio::test]
async fn list_wraps_single_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "projectId": "solo", "title": "Solo" })),
        )
        .mount(&mock_server)
        .await;

    let projects = client_for(&mock_server).list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].project_id.as_deref(), Some("solo"));
}

#[tokio::test]
async fn list_server_error_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_projects().await.unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 500, .. }));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn list_scalar_body_is_a_format_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!("not a list")))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server).list_projects().await.unwrap_err();
    assert!(matches!(err, ClientError::Format(_)));
}

#[tokio::test]
async fn list_envelopes_reads_processing_state() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!([
        {
            "id": 1,
            "status": "PROCESSING",
            "filename": "pending.pdf",
            "created_at": "2026-08-01T10:00:00Z"
        },
        {
            "id": 2,
            "status": "PROCESSED",
            "project": { "projectId": "p-2", "title": "Done" },
            "updated_at": "2026-08-02T09:30:00Z"
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let envelopes = client_for(&mock_server).list_envelopes().await.unwrap();

    assert_eq!(envelopes.len(), 2);
    assert_eq!(envelopes[0].status, ProcessingState::Processing);
    assert!(envelopes[0].project.is_none());
    assert_eq!(envelopes[1].status, ProcessingState::Processed);
    assert_eq!(
        envelopes[1].project.as_ref().unwrap().title.as_deref(),
        Some("Done")
    );
}

#[tokio::test]
async fn unconfigured_list_reads_the_mock_file_not_the_api() {
    // Any request reaching this server fails the expect(0) verification.
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let mock_path = dir.path().join("projects.json");
    std::fs::write(
        &mock_path,
        serde_json::json!([{ "projectId": "m-1", "title": "From mock" }]).to_string(),
    )
    .unwrap();

    let config = Config {
        api_base: None,
        mock_path,
    };
    let client = ProjectClient::new(config).unwrap();

    let projects = client.list_projects().await.unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title.as_deref(), Some("From mock"));
}

#[tokio::test]
async fn missing_mock_file_is_a_mock_resource_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        api_base: None,
        mock_path: dir.path().join("does-not-exist.json"),
    };
    let client = ProjectClient::new(config).unwrap();

    let err = client.list_projects().await.unwrap_err();
    assert!(matches!(err, ClientError::MockResource(_)));
}

#[tokio::test]
async fn upload_posts_multipart_and_returns_created_record() {
    let mock_server = MockServer::start().await;

    let created = serde_json::json!({ "projectId": "p-99", "title": "Uploaded" });

    Mock::given(method("POST"))
        .and(path("/projects/upload"))
        .respond_with(ResponseTemplate::new(201).set_body_json(&created))
        .expect(1)
        .mount(&mock_server)
        .await;

    let project = client_for(&mock_server)
        .upload_project("brief.pdf", b"%PDF-1.7 fake".to_vec())
        .await
        .unwrap();

    assert_eq!(project.project_id.as_deref(), Some("p-99"));
}

#[tokio::test]
async fn upload_failure_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/projects/upload"))
        .respond_with(ResponseTemplate::new(413))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .upload_project("huge.pdf", vec![0u8; 16])
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 413, .. }));
    assert!(err.to_string().contains("413"));
}

#[tokio::test]
async fn upload_without_base_fails_before_any_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ProjectClient::new(Config::unconfigured()).unwrap();
    let err = client
        .upload_project("brief.pdf", vec![1, 2, 3])
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Unconfigured(_)));
}

#[tokio::test]
async fn delete_sends_exact_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/project"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({ "id": "p-42" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    client_for(&mock_server).delete_project("p-42").await.unwrap();
}

#[tokio::test]
async fn delete_failure_carries_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/project"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let err = client_for(&mock_server)
        .delete_project("missing")
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 404, .. }));
}

#[tokio::test]
async fn delete_without_base_fails_before_any_request() {
    let client = ProjectClient::new(Config::unconfigured()).unwrap();
    let err = client.delete_project("p-42").await.unwrap_err();
    assert!(matches!(err, ClientError::Unconfigured(_)));
}

#[tokio::test]
async fn trailing_slash_in_base_is_stripped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = Config::with_base(format!("{}/", mock_server.uri()));
    let client = ProjectClient::new(config).unwrap();

    assert!(!client.api_base().ends_with('/'));
    assert!(client.list_projects().await.unwrap().is_empty());
}

#[test]
fn api_base_is_empty_when_unconfigured() {
    let client = ProjectClient::new(Config::unconfigured()).unwrap();
    assert_eq!(client.api_base(), "");
}
