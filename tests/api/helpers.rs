use std::sync::Arc;
use std::time::Duration;

use notify_relay::configuration::{get_configuration, Settings};
use notify_relay::domain::notification::service::Relay;
use notify_relay::inbound::http::Application;
use notify_relay::outbound::dispatcher::TokioDispatcher;
use notify_relay::outbound::notifier::slack_client::SlackClient;
use notify_relay::outbound::notifier::smtp_client::SmtpClient;
use notify_relay::outbound::telemetry::init_logger;
use once_cell::sync::Lazy;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let c = get_configuration().expect("Failed to read configuration");
    let default_filter_level = c.general.log_level;
    let subscriber_name = "test";
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(subscriber_name, &default_filter_level, std::io::sink);
    }
});

pub struct TestApp {
    pub address: String,
    pub slack_server: MockServer,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", &self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_slack(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/slack", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_slack_without_body(&self) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/slack", &self.address))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_send_email(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/send-email", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Delivery is fire-and-forget, so tests poll the mock webhook until the
    /// scheduled request lands.
    pub async fn wait_for_webhook_deliveries(&self, expected: usize) -> Vec<wiremock::Request> {
        for _ in 0..50 {
            let requests = self
                .slack_server
                .received_requests()
                .await
                .expect("Request recording is enabled");
            if requests.len() >= expected {
                return requests;
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
        panic!("Timed out waiting for {} webhook deliveries", expected);
    }
}

fn test_configuration() -> Settings {
    let mut c = get_configuration().expect("Failed to read configuration");
    c.application.port = 0;
    c
}

async fn spawn_with(configuration: Settings, slack_server: MockServer) -> TestApp {
    Lazy::force(&TRACING);

    let slack_client = configuration
        .slack
        .webhook_url
        .clone()
        .map(|url| Arc::new(SlackClient::new(url, configuration.slack.timeout())));
    let smtp_client = Arc::new(SmtpClient::new(configuration.smtp.clone()));
    let relay = Relay::new(slack_client, smtp_client, TokioDispatcher);

    let application = Application::build(relay, configuration.application)
        .await
        .expect("Failed to build application");
    let application_port = application.port();
    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address: format!("http://localhost:{}", application_port),
        slack_server,
    }
}

/// The usual test fixture: webhook URL points at a wiremock server.
pub async fn spawn_app() -> TestApp {
    let slack_server = MockServer::start().await;
    let mut configuration = test_configuration();
    configuration.slack.webhook_url = Some(slack_server.uri());
    spawn_with(configuration, slack_server).await
}

/// A relay started without any webhook URL, as when the deployment
/// environment forgot to provide one.
pub async fn spawn_app_without_webhook() -> TestApp {
    let slack_server = MockServer::start().await;
    let mut configuration = test_configuration();
    configuration.slack.webhook_url = None;
    spawn_with(configuration, slack_server).await
}
