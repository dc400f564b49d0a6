//! Webhook integration tests
//!
//! Every test runs the full router on in-memory stores with a recording
//! messenger, so no external services are needed.
//!
//! Run with: cargo test -p integration-tests --test webhook_tests

use bot_core::entities::DialogState;
use bot_test_utils::RecordingMessenger;
use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::{Method, StatusCode};

// ============================================================================
// Dialog Scenarios
// ============================================================================

#[tokio::test]
async fn test_start_command_replies_once() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("studio"), &text_update(42, "/start"))
        .await
        .unwrap();
    let body: OkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    assert_eq!(server.store().user_count(), 1);
    assert!(server.store().records().is_empty());

    let sent = server.messenger().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].chat_id, 42);
}

#[tokio::test]
async fn test_order_callback_creates_one_record() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("studio"), &callback_update(42, "cb1", "order_logo"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let records = server.store().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].service.as_deref(), Some("Логотип"));

    let sent = server.messenger().sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].text.contains(&records[0].id.to_string()));
    assert_eq!(server.messenger().acknowledged(), vec!["cb1".to_string()]);
}

#[tokio::test]
async fn test_free_text_completes_submission_once() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = webhook("appeals");

    server.post(&path, &text_update(7, "/appeal")).await.unwrap();
    assert_eq!(
        server.store().state("appeals", 7),
        Some(DialogState::AwaitingSubmission)
    );

    let response = server
        .post(&path, &text_update(7, "Сломана лавочка в сквере"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(server.store().state("appeals", 7), None);
    let records = server.store().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].message.as_deref(), Some("Сломана лавочка в сквере"));

    // Same text again: no state, so fallback and no record
    server
        .post(&path, &text_update(7, "Сломана лавочка в сквере"))
        .await
        .unwrap();
    assert_eq!(server.store().records().len(), 1);

    let sent = server.messenger().sent();
    assert_eq!(sent.len(), 3);
    assert!(sent[2].text.contains("/help"));
}

#[tokio::test]
async fn test_lksm_appeal_form() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = webhook("lksm");

    server.post(&path, &text_update(8, "/appeal")).await.unwrap();
    server
        .post(
            &path,
            &text_update(
                8,
                "ФИО: Петров Пётр\nТелефон: +79990000000\nТекст обращения: Нужен спортзал",
            ),
        )
        .await
        .unwrap();

    let records = server.store().records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].full_name.as_deref(), Some("Петров Пётр"));
    assert_eq!(records[0].phone.as_deref(), Some("+79990000000"));
    assert_eq!(records[0].category.as_deref(), Some("общее"));
    assert_eq!(records[0].message.as_deref(), Some("Нужен спортзал"));

    server.post(&path, &text_update(8, "/status")).await.unwrap();
    let listing = server.messenger().sent().last().unwrap().text.clone();
    assert!(listing.contains(&format!("#{}", records[0].id)));
}

#[tokio::test]
async fn test_command_overrides_pending_submission() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = webhook("appeals");

    server.post(&path, &text_update(9, "/appeal")).await.unwrap();
    server.post(&path, &text_update(9, "/start")).await.unwrap();

    assert!(server.store().records().is_empty());
    assert_eq!(server.messenger().sent().len(), 2);
}

#[tokio::test]
async fn test_user_text_is_escaped_in_replies() {
    let server = TestServer::start().await.expect("Failed to start server");
    let path = webhook("appeals");

    server.post(&path, &text_update(10, "/appeal")).await.unwrap();
    server
        .post(&path, &text_update(10, "<b>bold</b> & co"))
        .await
        .unwrap();
    server.post(&path, &text_update(10, "/status")).await.unwrap();

    let listing = server.messenger().sent().last().unwrap().text.clone();
    assert!(listing.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
}

// ============================================================================
// Updates That Produce No Dialog
// ============================================================================

#[tokio::test]
async fn test_invalid_update_is_acknowledged_and_dropped() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("studio"), &anonymous_update())
        .await
        .unwrap();
    let body: OkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    assert_eq!(server.store().user_count(), 0);
    assert!(server.messenger().sent().is_empty());
}

#[tokio::test]
async fn test_unrecognized_update_is_ignored() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("lksm"), &edited_message_update())
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(server.messenger().sent().is_empty());
}

#[tokio::test]
async fn test_message_without_text_only_registers_user() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("appeals"), &sticker_update(11))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    assert_eq!(server.store().user_count(), 1);
    assert!(server.messenger().sent().is_empty());
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn test_delivery_failure_still_answers_ok() {
    let server = TestServer::start_with_messenger(RecordingMessenger::failing())
        .await
        .expect("Failed to start server");

    let response = server
        .post(&webhook("studio"), &callback_update(12, "cb2", "order_landing"))
        .await
        .unwrap();
    let body: OkResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.ok);

    assert_eq!(server.store().records().len(), 1);
    assert_eq!(server.messenger().acknowledged(), vec!["cb2".to_string()]);
}

#[tokio::test]
async fn test_store_failure_is_500_and_callback_is_acknowledged() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store().set_offline(true);

    let response = server
        .post(&webhook("studio"), &callback_update(13, "cb3", "order_logo"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::INTERNAL_SERVER_ERROR)
        .await
        .unwrap();
    assert!(body.error.contains("connection refused"));
    assert_eq!(body.code.as_deref(), Some("DATABASE_ERROR"));

    assert_eq!(server.messenger().acknowledged(), vec!["cb3".to_string()]);
}

// ============================================================================
// HTTP Surface
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post_raw(&webhook("studio"), "{not json").await.unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code.as_deref(), Some("INVALID_BODY"));
}

#[tokio::test]
async fn test_unknown_bot_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("nope"), &text_update(1, "/start"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code.as_deref(), Some("UNKNOWN_BOT"));
    assert_eq!(server.store().user_count(), 0);
}

#[tokio::test]
async fn test_undecodable_bot_segment_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post(&webhook("%FF"), &text_update(1, "/start"))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert_eq!(body.code.as_deref(), Some("UNKNOWN_BOT"));
    assert_eq!(server.store().user_count(), 0);
}

#[tokio::test]
async fn test_options_returns_empty_200_with_cors() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .request(Method::OPTIONS, &webhook("studio"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    assert!(response.text().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_other_methods_are_405() {
    let server = TestServer::start().await.expect("Failed to start server");

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let response = server.request(method, &webhook("studio")).await.unwrap();
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
        let body: ErrorBody = assert_json(response, StatusCode::METHOD_NOT_ALLOWED)
            .await
            .unwrap();
        assert_eq!(body.error, "Method not allowed");
    }
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
