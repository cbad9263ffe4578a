use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use portfolio_contact::ContactMessage;
use serde_json::{Value, json};
use tower::ServiceExt;

mod common;

fn json_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/contact")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

#[tokio::test]
async fn test_valid_message_reaches_inbox() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::new(),
    );

    let response = app
        .router
        .oneshot(json_request(
            json!({"name": "Ana", "email": "ana@x.com", "message": "Hi"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body, json!({"status": "sent"}));

    assert_eq!(
        app.inbox.messages(),
        vec![ContactMessage::new("Ana", "ana@x.com", "Hi")]
    );
}

#[tokio::test]
async fn test_invalid_email_is_unprocessable() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::new(),
    );

    let response = app
        .router
        .oneshot(json_request(
            json!({"name": "Ana", "email": "ana", "message": "Hi"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body["status"], "invalid");
    assert!(body["errors"].get("email").is_some());

    assert!(app.inbox.messages().is_empty());
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::new(),
    );

    let response = app
        .router
        .oneshot(json_request(json!({"name": "Ana"}).to_string()))
        .await
        .unwrap();

    assert!(response.status().is_client_error());
    assert!(app.inbox.messages().is_empty());
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::new(),
    );

    let response = app
        .router
        .oneshot(json_request("{not json".to_owned()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_unsupported() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::new(),
    );

    let response = app
        .router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/contact")
                .body(Body::from(
                    json!({"name": "Ana", "email": "ana@x.com", "message": "Hi"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn test_inbox_failure_is_server_error() {
    let app = common::create_test_app(
        common::FakeTransport::replying(200),
        common::MemoryInbox::failing(),
    );

    let response = app
        .router
        .oneshot(json_request(
            json!({"name": "Ana", "email": "ana@x.com", "message": "Hi"}).to_string(),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = serde_json::from_str(&common::body_string(response).await).unwrap();
    assert_eq!(body, json!({"status": "error"}));
}
