use crate::configuration::SmtpSettings;
use crate::domain::notification::{
    models::email::{EmailBroadcast, EmailHtmlContent, EmailMessage, EmailSubject, RecipientEmail},
    ports::{BroadcastNotifier, NotifierError},
};
use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

pub struct SmtpClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpClient {
    pub fn new(configuration: SmtpSettings) -> Self {
        let credentials = Credentials::new(
            configuration.username.clone(),
            configuration.password.expose_secret().clone(),
        );
        // Submission over STARTTLS, the only mode the mail provider accepts.
        // Each send opens its own connection; the transport holds no pool
        // and can be built outside a runtime.
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&configuration.host)
            .expect("Invalid SMTP host")
            .port(configuration.port)
            .credentials(credentials)
            .build();
        let sender = configuration
            .sender()
            .expect("Invalid sender email address")
            .as_ref()
            .parse()
            .expect("Invalid sender mailbox");

        Self { transport, sender }
    }
}

#[async_trait]
impl BroadcastNotifier for SmtpClient {
    fn build_broadcast(&self, broadcast: &EmailBroadcast) -> Result<EmailMessage, NotifierError> {
        let subject = EmailSubject::try_from(format!(
            "{} servings on sale today!",
            broadcast.count()
        ))?;
        let html_content = EmailHtmlContent::try_from(format!(
            "<div style=\"font-family: sans-serif; padding: 10px;\">\
                <p>There are <b>{} servings</b> available today.</p>\
                <p>We look forward to seeing you!</p>\
            </div>",
            broadcast.count()
        ))?;

        Ok(EmailMessage::new(subject, html_content))
    }

    #[tracing::instrument(name = "Send a broadcast email", skip(self, recipient, message))]
    async fn send_broadcast(
        &self,
        recipient: &RecipientEmail,
        message: &EmailMessage,
    ) -> Result<(), NotifierError> {
        let to: Mailbox = recipient
            .as_ref()
            .parse()
            .with_context(|| format!("{} is not a valid mailbox", recipient))?;
        let email = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(message.subject_as_ref().as_ref())
            .header(ContentType::TEXT_HTML)
            .body(message.html_as_ref().as_ref().to_string())
            .context("Failed to assemble the broadcast email")?;

        self.transport
            .send(email)
            .await
            .context("Failed to submit the broadcast email over SMTP")?;

        Ok(())
    }
}
