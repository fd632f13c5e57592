mod common;

use folio_core::api::FileUpload;
use folio_core::auth::TokenStore;
use folio_core::models::{NewMessage, Project, ProjectForm, RecordId, SkillInput};
use folio_core::ApiError;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{authorization_headers, client_for};

#[tokio::test]
async fn test_bearer_header_follows_store() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let (api, store) = client_for(&server);
    api.list_projects().await.unwrap();
    store.set_token("abc").unwrap();
    api.list_projects().await.unwrap();
    store.clear_token().unwrap();
    api.list_projects().await.unwrap();

    assert_eq!(
        authorization_headers(&server).await,
        vec![None, Some("Bearer abc".to_string()), None]
    );
}

#[tokio::test]
async fn test_list_accepts_every_envelope_shape() {
    let server = MockServer::start().await;
    let item = json!({"id": 1, "title": "Folio"});
    Mock::given(method("GET"))
        .and(path("/api/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([item])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/blogs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": [item]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/showcase"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"showcase": [item]})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/skills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let (api, _) = client_for(&server);
    let projects = api.list_projects().await.unwrap();
    let blogs = api.list_blogs().await.unwrap();
    let showcase = api.list_showcase().await.unwrap();

    assert_eq!(projects[0].title.as_deref(), Some("Folio"));
    assert_eq!(blogs[0].title.as_deref(), Some("Folio"));
    assert_eq!(showcase[0].title.as_deref(), Some("Folio"));
    assert!(api.list_skills().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_single_record_unwraps_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/projects/7"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"project": {"id": 7, "title": "Seven"}})),
        )
        .mount(&server)
        .await;

    let (api, _) = client_for(&server);
    let project: Project = api.get_project(&RecordId::from(7)).await.unwrap();
    assert_eq!(project.id.as_str(), "7");
    assert_eq!(project.title_display(), "Seven");
}

#[tokio::test]
async fn test_error_status_mapping_uses_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/1"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "jwt expired"})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/2"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/api/projects/3"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "db down"})))
        .mount(&server)
        .await;

    let (api, store) = client_for(&server);
    store.set_token("abc").unwrap();

    let err = api.delete_project(&RecordId::from(1)).await.unwrap_err();
    assert!(err.is_authorization());
    assert_eq!(err.message(), "jwt expired");
    // The client reports rejection; it never clears the token itself
    assert_eq!(store.get_token().as_deref(), Some("abc"));

    let err = api.delete_project(&RecordId::from(2)).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound { .. }));
    assert_eq!(err.message(), "Failed to delete project");

    let err = api.delete_project(&RecordId::from(3)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), "db down");
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/messages/4"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let (api, _) = client_for(&server);
    let value = api.delete_message(&RecordId::from(4)).await.unwrap();
    assert!(value.is_null());
}

#[tokio::test]
async fn test_project_upload_is_multipart() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/projects"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "created"})))
        .expect(1)
        .mount(&server)
        .await;

    let (api, store) = client_for(&server);
    store.set_token("abc").unwrap();
    let form = ProjectForm {
        title: "Folio".to_string(),
        tech_stack: vec!["Rust".to_string(), "React".to_string()],
        image: Some(FileUpload::new("shot.png", vec![0x89, 0x50, 0x4e, 0x47])),
        ..Default::default()
    };
    let value = api.create_project(form).await.unwrap();
    assert_eq!(value["message"], "created");

    let requests = server.received_requests().await.unwrap();
    let request = &requests[0];
    let content_type = request
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("multipart/form-data"));

    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"title\""));
    assert!(body.contains("Rust,React"));
    assert!(body.contains("name=\"image\"; filename=\"shot.png\""));
    assert!(body.contains("image/png"));
}

#[tokio::test]
async fn test_invalid_input_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (api, _) = client_for(&server);
    let err = api
        .send_message(&NewMessage {
            name: "Ann".into(),
            email: "not-an-email".into(),
            message: "hi".into(),
            ..Default::default()
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: None, .. }));

    let err = api.create_skill(&SkillInput::default()).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: None, .. }));

    let err = api.create_project(ProjectForm::default()).await.unwrap_err();
    assert_eq!(err.message(), "Project title is required");
}

#[tokio::test]
async fn test_empty_record_id_never_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (api, store) = client_for(&server);
    store.set_token("abc").unwrap();
    let empty = RecordId::default();

    let err = api.delete_project(&empty).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation { status: None, .. }));
    assert_eq!(err.message(), "Record id is required");

    assert!(api.get_project(&empty).await.is_err());
    assert!(api.delete_blog(&empty).await.is_err());
    assert!(api.update_skill(&empty, &SkillInput::default()).await.is_err());
    assert!(api.delete_social_link(&RecordId::from(" ")).await.is_err());
    assert!(api.delete_message(&empty).await.is_err());
}

#[tokio::test]
async fn test_public_contact_and_chat() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/messages"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"message": "Message sent"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/openai/public/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"reply": "Hello!"})))
        .mount(&server)
        .await;

    let (api, _) = client_for(&server);
    api.send_message(&NewMessage {
        name: "Ann".into(),
        email: "ann@example.com".into(),
        subject: "Hire".into(),
        message: "Are you available?".into(),
    })
    .await
    .unwrap();
    assert_eq!(api.public_chat("hi").await.unwrap(), "Hello!");

    let requests = server.received_requests().await.unwrap();
    let sent: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(sent["email"], "ann@example.com");
    assert_eq!(sent["subject"], "Hire");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let store = std::sync::Arc::new(folio_core::auth::MemoryTokenStore::new());
    let api = folio_core::ApiClient::new("http://127.0.0.1:9/api", store).unwrap();

    let err = api.list_projects().await.unwrap_err();
    assert!(err.is_network());
}
