use crate::helpers::spawn_app;

#[tokio::test]
async fn send_email_returns_202_for_a_valid_request() {
    let app = spawn_app().await;

    let response = app
        .post_send_email(serde_json::json!({"email": "a@b.com", "count": 5}))
        .await;

    assert_eq!(response.status().as_u16(), 202);
    let body: serde_json::Value = response.json().await.expect("Body is valid JSON");
    assert_eq!(body, serde_json::json!({"status": "broadcast_queued"}));
}

#[tokio::test]
async fn send_email_returns_422_for_an_invalid_address() {
    let app = spawn_app().await;

    let response = app
        .post_send_email(serde_json::json!({"email": "not-an-email", "count": 5}))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}

#[tokio::test]
async fn send_email_returns_422_when_a_required_field_is_missing() {
    let app = spawn_app().await;

    let test_cases = vec![
        (serde_json::json!({"email": "a@b.com"}), "missing count"),
        (serde_json::json!({"count": 5}), "missing email"),
        (serde_json::json!({}), "missing both fields"),
    ];

    for (body, description) in test_cases {
        let response = app.post_send_email(body).await;

        assert_eq!(
            response.status().as_u16(),
            422,
            "The API did not return 422 when the payload was {}.",
            description
        );
    }
}

#[tokio::test]
async fn send_email_returns_422_when_count_is_not_an_integer() {
    let app = spawn_app().await;

    let response = app
        .post_send_email(serde_json::json!({"email": "a@b.com", "count": "five"}))
        .await;

    assert_eq!(response.status().as_u16(), 422);
}
