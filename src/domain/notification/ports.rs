use async_trait::async_trait;
use futures::future::BoxFuture;

use super::models::{
    email::{EmailBroadcast, EmailBroadcastRequest, EmailError, EmailMessage, RecipientEmail},
    slack::{SlackAlertRequest, SlackNotification},
};

#[async_trait]
/// Delivers a single chat alert to the configured webhook.
pub trait AlertNotifier: Send + Sync + 'static {
    async fn post_alert(&self, alert: &SlackNotification) -> Result<(), NotifierError>;
}

#[async_trait]
/// Renders and delivers a single broadcast email.
pub trait BroadcastNotifier: Send + Sync + 'static {
    fn build_broadcast(&self, broadcast: &EmailBroadcast) -> Result<EmailMessage, NotifierError>;

    async fn send_broadcast(
        &self,
        recipient: &RecipientEmail,
        message: &EmailMessage,
    ) -> Result<(), NotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum NotifierError {
    #[error("Invalid notification content: {0}")]
    InvalidMessage(#[from] EmailError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

/// Submits a detached job for execution after the current handler has
/// answered. Nothing is reported back to the submitter.
pub trait Dispatcher: Send + Sync + 'static {
    fn dispatch(&self, job: BoxFuture<'static, ()>);
}

/// Decides synchronously whether a notification can be queued, then hands
/// the delivery itself to a [`Dispatcher`].
pub trait NotificationService: Send + Sync + 'static {
    fn queue_slack_alert(
        &self,
        request: SlackAlertRequest,
    ) -> Result<(), NotificationServiceError>;

    fn queue_email_broadcast(
        &self,
        request: EmailBroadcastRequest,
    ) -> Result<(), NotificationServiceError>;
}

#[derive(thiserror::Error, Debug)]
pub enum NotificationServiceError {
    #[error("Slack webhook URL is not configured")]
    WebhookNotConfigured,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<EmailError> for NotificationServiceError {
    fn from(error: EmailError) -> Self {
        Self::ValidationError(error.to_string())
    }
}

impl From<NotifierError> for NotificationServiceError {
    fn from(error: NotifierError) -> Self {
        match error {
            NotifierError::InvalidMessage(e) => Self::Unexpected(anyhow::Error::from(e)),
            NotifierError::Unexpected(e) => Self::Unexpected(e),
        }
    }
}
