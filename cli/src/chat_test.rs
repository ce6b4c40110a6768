use super::*;
use exchange::Sender;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_chat(status: u16, body: serde_json::Value, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn reply_is_appended_after_user_message() {
    let server = mock_chat(200, json!({"reply": "Hi!"}), 1).await;
    let api = HttpApi::new(&server.uri(), 5).expect("client");
    let mut session = ChatSession::new(Some("1042"));

    let line = exchange_once(&api, &mut session, "hello").await.expect("bot line");
    assert_eq!(line.sender, Sender::Bot);
    assert_eq!(line.text, "Hi!");

    let texts: Vec<&str> = session.messages().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts[1..], ["hello", "Hi!"]);
    assert!(!session.is_in_flight());
}

#[tokio::test]
async fn error_status_is_logged_inline() {
    let server = mock_chat(500, json!({"error": "overloaded"}), 1).await;
    let api = HttpApi::new(&server.uri(), 5).expect("client");
    let mut session = ChatSession::new(Some("1042"));

    let line = exchange_once(&api, &mut session, "hello").await.expect("bot line");
    assert_eq!(line.text, "Error: overloaded");
    assert_eq!(session.last_error(), Some("overloaded"));
}

#[tokio::test]
async fn missing_reply_field_is_logged_inline() {
    let server = mock_chat(200, json!({}), 1).await;
    let api = HttpApi::new(&server.uri(), 5).expect("client");
    let mut session = ChatSession::new(Some("1042"));

    let line = exchange_once(&api, &mut session, "hello").await.expect("bot line");
    assert!(line.text.starts_with("Error:"));
    assert!(line.text.contains("Invalid response format"));
}

#[tokio::test]
async fn blank_line_sends_nothing() {
    let server = mock_chat(200, json!({"reply": "unused"}), 0).await;
    let api = HttpApi::new(&server.uri(), 5).expect("client");
    let mut session = ChatSession::new(Some("1042"));

    assert!(exchange_once(&api, &mut session, "   ").await.is_none());
    assert_eq!(session.messages().len(), 1);
}

#[tokio::test]
async fn missing_customer_sends_nothing() {
    let server = mock_chat(200, json!({"reply": "unused"}), 0).await;
    let api = HttpApi::new(&server.uri(), 5).expect("client");
    let mut session = ChatSession::new(None);

    assert!(exchange_once(&api, &mut session, "hello").await.is_none());
    assert_eq!(session.messages().len(), 1);
}
