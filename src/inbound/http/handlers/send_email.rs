use crate::{
    domain::notification::{models::email::EmailBroadcastRequest, ports::NotificationService},
    inbound::http::{errors::AppError, state::SharedRelayState},
};
use actix_web::{web, HttpResponse};

#[derive(serde::Serialize)]
struct QueuedResponse {
    status: &'static str,
}

#[tracing::instrument(
    name = "Accepting an email broadcast request",
    skip(body, state),
    fields(recipient_email = %body.email, item_count = %body.count)
)]
pub async fn send_email<NS: NotificationService>(
    body: web::Json<EmailBroadcastRequest>,
    state: web::Data<SharedRelayState<NS>>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    state.notification_service().queue_email_broadcast(request)?;

    Ok(HttpResponse::Accepted().json(QueuedResponse {
        status: "broadcast_queued",
    }))
}
