/// Message posted when the caller supplies no usable text.
pub const DEFAULT_ALERT_TEXT: &str = "Webhook received";

/// Inbound payload of `POST /slack`. The whole body is optional, as is the
/// `text` field inside it.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct SlackAlertRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackNotification(String);

impl SlackNotification {
    pub fn text(&self) -> &str {
        &self.0
    }
}

impl From<SlackAlertRequest> for SlackNotification {
    fn from(request: SlackAlertRequest) -> Self {
        // Non-blank input is carried verbatim; blank or absent input falls
        // back to the fixed default.
        match request.text {
            Some(text) if !text.trim().is_empty() => Self(text),
            _ => Self(DEFAULT_ALERT_TEXT.to_string()),
        }
    }
}
