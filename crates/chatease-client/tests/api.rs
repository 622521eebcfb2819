//! End-to-end tests against a mock HTTP server, exercising the real
//! reqwest-backed transport.

use chatease_client::{
    ChatEaseClient, ChatEaseClientOptions, ClientError, CreateBoardParams, GuestInfo,
    InitialStatus, StatusKey,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ChatEaseClient {
    ChatEaseClient::new(ChatEaseClientOptions {
        api_token: "test-token".to_string(),
        workspace_slug: "test-workspace".to_string(),
        base_url: Some(server.uri()),
    })
    .expect("client construction")
}

fn base_params() -> CreateBoardParams {
    CreateBoardParams {
        title: "Inquiry #1".to_string(),
        guest: GuestInfo {
            name: "Taro".to_string(),
            email: "taro@example.com".to_string(),
        },
        board_unique_key: "20260225-0001".to_string(),
        in_reply_to: None,
    }
}

#[tokio::test]
async fn create_board_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/board"))
        .and(header("Content-Type", "application/json"))
        .and(header("X-Chatease-API-Token", "test-token"))
        .and(body_partial_json(json!({
            "workspaceSlug": "test-workspace",
            "boardUniqueKey": "20260225-0001",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slug": "board-slug",
            "hostURL": "https://host.example.com/board-slug",
            "guestURL": "https://guest.example.com/board-slug",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .create_board(base_params())
        .await
        .expect("create board");

    assert_eq!(response.slug, "board-slug");
    assert!(response.guest_url.contains("board-slug"));
}

#[tokio::test]
async fn create_board_with_status_sends_status_fields() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/board"))
        .and(body_partial_json(json!({
            "initialStatus": {
                "statusKey": "scheduled_for_response",
                "timeLimit": "2026-03-01",
            },
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "slug": "board-slug",
            "hostURL": "https://host.example.com/board-slug",
            "guestURL": "https://guest.example.com/board-slug",
        })))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server)
        .create_board_with_status(
            base_params(),
            InitialStatus::scheduled(StatusKey::ScheduledForResponse, "2026-03-01"),
        )
        .await
        .expect("create board with status");
}

#[tokio::test]
async fn non_ok_status_is_reported_with_status_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/board"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error":"Bad request"}"#),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .create_board(base_params())
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("ChatEase API error: 400 Bad Request"));
    assert!(message.contains(r#"Body: {"error":"Bad request"}"#));
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
}

#[tokio::test]
async fn transport_failure_propagates_unwrapped() {
    // Nothing listens on port 1; the connection itself fails.
    let client = ChatEaseClient::new(ChatEaseClientOptions {
        api_token: "test-token".to_string(),
        workspace_slug: "test-workspace".to_string(),
        base_url: Some("http://127.0.0.1:1".to_string()),
    })
    .expect("client construction");

    let err = client.create_board(base_params()).await.unwrap_err();
    assert!(matches!(err, ClientError::Transport(_)));
}

#[tokio::test]
async fn validation_failure_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/board"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut params = base_params();
    params.guest.email = "not-an-email".to_string();

    let err = client_for(&server).create_board(params).await.unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
}
