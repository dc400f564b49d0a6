//! Outbound Bot API calls, end to end
//!
//! The bots talk HTTP to a wiremock server standing in for Telegram.
//!
//! Run with: cargo test -p integration-tests --test telegram_tests

use integration_tests::{assert_json, fixtures::*, TestServer, TEST_TOKEN};
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_path(method_name: &str) -> String {
    format!("/bot{TEST_TOKEN}/{method_name}")
}

#[tokio::test]
async fn test_order_callback_calls_send_and_answer() {
    let telegram = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("sendMessage")))
        .and(body_partial_json(json!({
            "chat_id": 42,
            "parse_mode": "HTML",
            "reply_markup": {
                "inline_keyboard": [[{"text": "« Назад к услугам", "callback_data": "show_services"}]]
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&telegram)
        .await;

    Mock::given(method("POST"))
        .and(path(api_path("answerCallbackQuery")))
        .and(body_partial_json(json!({"callback_query_id": "cb1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": true})))
        .expect(1)
        .mount(&telegram)
        .await;

    let server = TestServer::start_with_telegram(&telegram.uri())
        .await
        .expect("Failed to start server");

    let response = server
        .post(&webhook("studio"), &callback_update(42, "cb1", "order_logo"))
        .await
        .unwrap();
    let body: OkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    let records = server.store().records();
    assert_eq!(records.len(), 1);

    let requests = telegram.received_requests().await.unwrap();
    let sent = requests
        .iter()
        .find(|r| r.url.path().ends_with("/sendMessage"))
        .unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&sent.body).unwrap();
    assert!(payload["text"]
        .as_str()
        .unwrap()
        .contains(&records[0].id.to_string()));
}

#[tokio::test]
async fn test_plain_reply_has_no_keyboard() {
    let telegram = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(api_path("sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
        .expect(1)
        .mount(&telegram)
        .await;

    let server = TestServer::start_with_telegram(&telegram.uri())
        .await
        .expect("Failed to start server");

    server
        .post(&webhook("appeals"), &text_update(5, "/help"))
        .await
        .unwrap();

    let requests = telegram.received_requests().await.unwrap();
    let payload: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(payload["chat_id"], 5);
    assert!(payload.get("reply_markup").is_none());
}

#[tokio::test]
async fn test_telegram_failure_does_not_fail_the_webhook() {
    let telegram = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "ok": false,
            "description": "Bad Gateway"
        })))
        .mount(&telegram)
        .await;

    let server = TestServer::start_with_telegram(&telegram.uri())
        .await
        .expect("Failed to start server");

    server
        .post(&webhook("appeals"), &text_update(6, "/appeal"))
        .await
        .unwrap();
    let response = server
        .post(&webhook("appeals"), &text_update(6, "Нет света в подъезде"))
        .await
        .unwrap();
    let body: OkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    assert_eq!(server.store().records().len(), 1);
    assert_eq!(server.store().state("appeals", 6), None);
}
