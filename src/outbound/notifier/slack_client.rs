use crate::domain::notification::{
    models::slack::SlackNotification,
    ports::{AlertNotifier, NotifierError},
};
use async_trait::async_trait;
use reqwest::Client;

#[derive(Debug)]
pub struct SlackClient {
    http_client: Client,
    webhook_url: String,
}

impl SlackClient {
    pub fn new(webhook_url: String, timeout: std::time::Duration) -> Self {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to build the webhook HTTP client");
        Self {
            http_client,
            webhook_url,
        }
    }
}

#[async_trait]
impl AlertNotifier for SlackClient {
    #[tracing::instrument(name = "Post an alert to the Slack webhook", skip(self, alert))]
    async fn post_alert(&self, alert: &SlackNotification) -> Result<(), NotifierError> {
        let request_body = WebhookRequest { text: alert.text() };
        self.http_client
            .post(&self.webhook_url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| NotifierError::Unexpected(anyhow::Error::from(e)))?
            .error_for_status()
            .map_err(|e| NotifierError::Unexpected(anyhow::Error::from(e)))?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
struct WebhookRequest<'a> {
    text: &'a str,
}
