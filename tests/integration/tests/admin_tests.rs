//! Admin surface and health integration tests
//!
//! Run with: cargo test -p integration-tests --test admin_tests

use integration_tests::{assert_json, assert_status, fixtures::*, TestServer};
use reqwest::{Method, StatusCode};
use serde_json::json;

/// Place an order through the webhook and return its id
async fn place_order(server: &TestServer, user_id: i64, service: &str) -> i64 {
    let response = server
        .post(
            &webhook("studio"),
            &callback_update(user_id, "cb", &format!("order_{service}")),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    server.store().records().last().unwrap().id
}

async fn list(server: &TestServer, bot: &str) -> RecordList {
    let response = server.get(&orders(bot)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Listing
// ============================================================================

#[tokio::test]
async fn test_list_is_newest_first_and_scoped_to_bot() {
    let server = TestServer::start().await.expect("Failed to start server");

    let first = place_order(&server, 1, "logo").await;
    let second = place_order(&server, 2, "shop").await;
    server
        .post(&webhook("appeals"), &text_update(3, "/appeal"))
        .await
        .unwrap();
    server
        .post(&webhook("appeals"), &text_update(3, "Текст"))
        .await
        .unwrap();

    let studio = list(&server, "studio").await;
    let ids: Vec<i64> = studio.orders.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![second, first]);
    assert_eq!(studio.orders[0].kind, "order");
    assert_eq!(studio.orders[0].status, "new");
    assert_eq!(studio.orders[0].telegram_user_id, 2);
    assert_eq!(studio.orders[1].service.as_deref(), Some("Логотип"));

    let appeals = list(&server, "appeals").await;
    assert_eq!(appeals.orders.len(), 1);
    assert_eq!(appeals.orders[0].bot, "appeals");
    assert_eq!(appeals.orders[0].kind, "appeal");
    assert_eq!(appeals.orders[0].message.as_deref(), Some("Текст"));
}

#[tokio::test]
async fn test_list_unknown_bot_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get(&orders("ghost")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Status Updates
// ============================================================================

#[tokio::test]
async fn test_update_status_then_list() {
    let server = TestServer::start().await.expect("Failed to start server");
    let id = place_order(&server, 5, "avatar").await;

    let response = server
        .put(&orders("studio"), &json!({ "id": id, "status": "done" }))
        .await
        .unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let listed = list(&server, "studio").await;
    assert_eq!(listed.orders[0].status, "done");
}

#[tokio::test]
async fn test_update_accepts_free_form_status() {
    let server = TestServer::start().await.expect("Failed to start server");
    let id = place_order(&server, 6, "logo").await;
    let status = "в работе у дизайнера, ждём ответа клиента";

    let response = server
        .put(&orders("studio"), &json!({ "id": id, "status": status }))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let listed = list(&server, "studio").await;
    assert_eq!(listed.orders[0].status, status);
}

#[tokio::test]
async fn test_update_without_status_is_400_and_changes_nothing() {
    let server = TestServer::start().await.expect("Failed to start server");
    let id = place_order(&server, 5, "avatar").await;

    let response = server
        .put(&orders("studio"), &json!({ "id": id }))
        .await
        .unwrap();
    let body: ErrorBody = assert_json(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(body.code.as_deref(), Some("VALIDATION_ERROR"));

    let response = server
        .put(&orders("studio"), &json!({ "id": id, "status": "" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let response = server
        .put(&orders("studio"), &json!({ "status": "done" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();

    let listed = list(&server, "studio").await;
    assert_eq!(listed.orders[0].status, "new");
}

#[tokio::test]
async fn test_update_unknown_record_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .put(&orders("studio"), &json!({ "id": 999, "status": "done" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_update_through_another_bot_is_404() {
    let server = TestServer::start().await.expect("Failed to start server");
    let id = place_order(&server, 6, "logo").await;

    let response = server
        .put(&orders("lksm"), &json!({ "id": id, "status": "done" }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();

    assert_eq!(list(&server, "studio").await.orders[0].status, "new");
}

#[tokio::test]
async fn test_update_with_malformed_body_is_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let url = format!("{}{}", server.base_url(), orders("studio"));
    let response = server
        .client
        .put(&url)
        .header("Content-Type", "application/json")
        .body("{\"id\": ")
        .send()
        .await
        .unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Deletion
// ============================================================================

#[tokio::test]
async fn test_delete_record() {
    let server = TestServer::start().await.expect("Failed to start server");
    let keep = place_order(&server, 7, "logo").await;
    let removed = place_order(&server, 7, "shop").await;

    let response = server
        .delete(&orders("studio"), &json!({ "id": removed }))
        .await
        .unwrap();
    let body: SuccessResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body.success);

    let ids: Vec<i64> = list(&server, "studio")
        .await
        .orders
        .iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec![keep]);

    // Gone now
    let response = server
        .delete(&orders("studio"), &json!({ "id": removed }))
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

#[tokio::test]
async fn test_delete_without_id_is_400() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.delete(&orders("studio"), &json!({})).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Methods
// ============================================================================

#[tokio::test]
async fn test_admin_options_and_unsupported_methods() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .request(Method::OPTIONS, &orders("studio"))
        .await
        .unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    for method in [Method::POST, Method::PATCH] {
        let response = server.request(method, &orders("studio")).await.unwrap();
        let body: ErrorBody = assert_json(response, StatusCode::METHOD_NOT_ALLOWED)
            .await
            .unwrap();
        assert_eq!(body.error, "Method not allowed");
    }
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    let body: HealthJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "healthy");
    assert_eq!(body.service, "dialog-bots");
    assert_eq!(body.bots, vec!["appeals", "lksm", "studio"]);
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessJson = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.status, "ready");

    server.store().set_offline(true);
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: ReadinessJson = assert_json(response, StatusCode::SERVICE_UNAVAILABLE)
        .await
        .unwrap();
    assert_eq!(body.status, "not_ready");
    assert_eq!(body.checks["database"], "unhealthy");
}
