mod common;

use axum::{Router, middleware};
use axum_test::TestServer;
use serde_json::{Value, json};
use sqlx::PgPool;

use news_service::api;
use news_service::api::middleware::audit;

fn make_server(pool: PgPool) -> (TestServer, tokio::sync::mpsc::Receiver<news_service::domain::audit::AuditRecord>) {
    let (state, rx) = common::create_test_state(pool);
    let app = Router::new()
        .nest(
            "/api",
            api::routes::routes()
                .layer(middleware::from_fn_with_state(state.clone(), audit::layer)),
        )
        .with_state(state);
    (TestServer::new(app).unwrap(), rx)
}

#[sqlx::test]
async fn test_audit_record_captures_request_and_response(pool: PgPool) {
    let (server, mut rx) = make_server(pool);

    let response = server
        .post("/api/news")
        .json(&json!({
            "title": "Launch day",
            "shortDescription": "We are live",
            "text": "Everything shipped on time"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::CREATED);

    let record = rx.recv().await.unwrap();

    assert_eq!(record.endpoint, "/api/news");
    assert_eq!(record.method, "POST");
    assert_eq!(record.status_code, 201);
    assert_eq!(record.body.as_ref().unwrap()["title"], "Launch day");
    assert!(record.response["id"].is_string());
    assert!(record.headers.is_object());
    assert!(record.process_time_ms >= 0);
}

#[sqlx::test]
async fn test_audit_record_for_query_request(pool: PgPool) {
    let (server, mut rx) = make_server(pool);

    server.get("/api/news?page=1&limit=10").await.assert_status_ok();

    let record = rx.recv().await.unwrap();

    assert_eq!(record.method, "GET");
    assert_eq!(record.query, "page=1&limit=10");
    // GET carries no body.
    assert!(record.body.is_none());
    let response: &Value = &record.response;
    assert_eq!(response["total"], 0);
}

#[sqlx::test]
async fn test_audit_failure_does_not_affect_the_request(pool: PgPool) {
    let (server, rx) = make_server(pool);
    // Closed channel: every try_send fails.
    drop(rx);

    let response = server.get("/api/news?page=1&limit=10").await;

    response.assert_status_ok();
}

#[sqlx::test]
async fn test_audit_records_error_responses_too(pool: PgPool) {
    let (server, mut rx) = make_server(pool);

    server
        .get("/api/news?page=0&limit=10")
        .await
        .assert_status_bad_request();

    let record = rx.recv().await.unwrap();

    assert_eq!(record.status_code, 400);
    assert_eq!(record.response["error"]["code"], "validation_error");
}
