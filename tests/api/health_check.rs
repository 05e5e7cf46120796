use crate::helpers::{spawn_app, spawn_app_without_webhook};

#[tokio::test]
async fn healthz_returns_200_with_an_ok_status() {
    let app = spawn_app().await;

    let response = app.get("/healthz").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Body is valid JSON");
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn healthz_ignores_missing_webhook_configuration() {
    let app = spawn_app_without_webhook().await;

    let response = app.get("/healthz").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Body is valid JSON");
    assert_eq!(body, serde_json::json!({"status": "ok"}));
}

#[tokio::test]
async fn root_returns_a_status_payload() {
    let app = spawn_app().await;

    let response = app.get("/").await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.expect("Body is valid JSON");
    assert!(body.get("status").is_some());
    assert!(body.get("docs").is_some());
    assert!(body.get("redoc").is_some());
}
