use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Invalid recipient email: {0}")]
    InvalidRecipient(String),
    #[error("Invalid email subject: {0}")]
    InvalidSubject(String),
    #[error("Invalid email Html content: {0}")]
    InvalidHtmlContent(String),
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct RecipientEmail(String);

impl RecipientEmail {
    pub fn parse(s: String) -> Result<RecipientEmail, EmailError> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::InvalidRecipient(format!(
                "{} is not a valid email",
                s
            )))
        }
    }
}

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<RecipientEmail> for String {
    fn from(email: RecipientEmail) -> Self {
        email.0
    }
}

/// Inbound payload of `POST /send-email`.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct EmailBroadcastRequest {
    pub email: String,
    pub count: i64,
}

/// A validated broadcast request: who to mail, and how many items the
/// templated body should announce.
#[derive(Debug, Clone)]
pub struct EmailBroadcast {
    recipient: RecipientEmail,
    count: i64,
}

impl EmailBroadcast {
    pub fn recipient(&self) -> &RecipientEmail {
        &self.recipient
    }

    pub fn count(&self) -> i64 {
        self.count
    }
}

impl TryFrom<EmailBroadcastRequest> for EmailBroadcast {
    type Error = EmailError;

    fn try_from(request: EmailBroadcastRequest) -> Result<Self, Self::Error> {
        let recipient = RecipientEmail::parse(request.email)?;
        Ok(Self {
            recipient,
            count: request.count,
        })
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailMessage {
    subject: EmailSubject,
    html_content: EmailHtmlContent,
}

impl EmailMessage {
    pub fn new(subject: EmailSubject, html_content: EmailHtmlContent) -> Self {
        Self {
            subject,
            html_content,
        }
    }

    pub fn subject_as_ref(&self) -> &EmailSubject {
        &self.subject
    }

    pub fn html_as_ref(&self) -> &EmailHtmlContent {
        &self.html_content
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailSubject(String);

impl TryFrom<String> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidSubject(
                "EmailSubject cannot be empty.".into(),
            ))
        }
    }
}

impl TryFrom<&str> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EmailSubject::try_from(value.to_string())
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailHtmlContent(String);

impl TryFrom<String> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value))
        } else {
            Err(EmailError::InvalidHtmlContent(
                "EmailHtmlContent cannot be empty.".into(),
            ))
        }
    }
}

impl TryFrom<&str> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        EmailHtmlContent::try_from(value.to_string())
    }
}

impl AsRef<str> for EmailHtmlContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
