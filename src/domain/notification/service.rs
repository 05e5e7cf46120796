use std::sync::Arc;

use super::models::{
    email::{EmailBroadcast, EmailBroadcastRequest},
    slack::{SlackAlertRequest, SlackNotification},
};
use super::ports::{
    AlertNotifier, BroadcastNotifier, Dispatcher, NotificationService, NotificationServiceError,
};

/// Stateless relay between the HTTP surface and the outbound notifiers.
///
/// Both queueing operations follow the same contract: everything detectable
/// before scheduling (missing webhook configuration, invalid recipient) is
/// reported synchronously; delivery itself runs detached and its failures
/// are logged, never surfaced.
pub struct Relay<AN, BN, D> {
    alert_notifier: Option<Arc<AN>>,
    broadcast_notifier: Arc<BN>,
    dispatcher: D,
}

impl<AN, BN, D> Relay<AN, BN, D>
where
    AN: AlertNotifier,
    BN: BroadcastNotifier,
    D: Dispatcher,
{
    pub fn new(
        alert_notifier: Option<Arc<AN>>,
        broadcast_notifier: Arc<BN>,
        dispatcher: D,
    ) -> Self {
        Self {
            alert_notifier,
            broadcast_notifier,
            dispatcher,
        }
    }
}

impl<AN, BN, D> NotificationService for Relay<AN, BN, D>
where
    AN: AlertNotifier,
    BN: BroadcastNotifier,
    D: Dispatcher,
{
    #[tracing::instrument(name = "Queue a Slack alert", skip(self, request))]
    fn queue_slack_alert(
        &self,
        request: SlackAlertRequest,
    ) -> Result<(), NotificationServiceError> {
        let notifier = self
            .alert_notifier
            .clone()
            .ok_or(NotificationServiceError::WebhookNotConfigured)?;
        let alert = SlackNotification::from(request);

        self.dispatcher.dispatch(Box::pin(async move {
            if let Err(e) = notifier.post_alert(&alert).await {
                tracing::error!(error.cause_chain = ?e, "Failed to deliver Slack alert");
            }
        }));

        Ok(())
    }

    #[tracing::instrument(name = "Queue an email broadcast", skip(self, request))]
    fn queue_email_broadcast(
        &self,
        request: EmailBroadcastRequest,
    ) -> Result<(), NotificationServiceError> {
        let broadcast = EmailBroadcast::try_from(request)?;
        let message = self.broadcast_notifier.build_broadcast(&broadcast)?;
        let notifier = Arc::clone(&self.broadcast_notifier);

        self.dispatcher.dispatch(Box::pin(async move {
            if let Err(e) = notifier.send_broadcast(broadcast.recipient(), &message).await {
                tracing::error!(error.cause_chain = ?e, "Failed to deliver email broadcast");
            }
        }));

        Ok(())
    }
}
