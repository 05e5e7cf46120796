use std::sync::Arc;

use notify_relay::configuration::get_configuration;
use notify_relay::domain::notification::service::Relay;
use notify_relay::inbound::http::Application;
use notify_relay::outbound::dispatcher::TokioDispatcher;
use notify_relay::outbound::notifier::slack_client::SlackClient;
use notify_relay::outbound::notifier::smtp_client::SmtpClient;
use notify_relay::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger("notify-relay", &configuration.log_level(), std::io::stdout);

    let slack_client = configuration
        .slack
        .webhook_url
        .clone()
        .map(|url| Arc::new(SlackClient::new(url, configuration.slack.timeout())));
    let smtp_client = Arc::new(SmtpClient::new(configuration.smtp.clone()));
    let relay = Relay::new(slack_client, smtp_client, TokioDispatcher);

    let application = Application::build(relay, configuration.application).await?;
    application.run_until_stopped().await?;
    Ok(())
}
