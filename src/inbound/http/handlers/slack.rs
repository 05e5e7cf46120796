use crate::{
    domain::notification::{models::slack::SlackAlertRequest, ports::NotificationService},
    inbound::http::{errors::AppError, state::SharedRelayState},
};
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
struct QueuedResponse {
    status: &'static str,
}

/// `POST /slack`. An absent body is treated as an empty request and falls
/// back to the default alert text; a present body must deserialize.
#[tracing::instrument(name = "Accepting a Slack alert request", skip(body, state))]
pub async fn slack<NS: NotificationService>(
    body: web::Bytes,
    state: web::Data<SharedRelayState<NS>>,
) -> Result<HttpResponse, AppError> {
    let request = if body.is_empty() {
        SlackAlertRequest::default()
    } else {
        serde_json::from_slice(&body).map_err(|e| AppError::ValidationError(e.to_string()))?
    };
    state.notification_service().queue_slack_alert(request)?;

    Ok(HttpResponse::Accepted().json(QueuedResponse { status: "queued" }))
}
