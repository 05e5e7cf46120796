pub mod slack_client;
pub mod smtp_client;
