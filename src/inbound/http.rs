use crate::configuration::ApplicationSettings;
use crate::domain::notification::ports::NotificationService;
use crate::inbound::http::errors::AppError;
use crate::inbound::http::handlers::{health_check, home, send_email, slack};
use crate::inbound::http::state::SharedRelayState;
use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

mod errors;
mod handlers;
pub mod state;

pub struct Application {
    port: u16,
    server: Server,
}

fn run<NS: NotificationService>(
    listener: TcpListener,
    relay_state: SharedRelayState<NS>,
) -> Result<Server, std::io::Error> {
    let relay_state = web::Data::new(relay_state);

    let server = HttpServer::new(move || {
        // The front-end is served from another origin; allow it without
        // credentials and without opening methods beyond what the API uses.
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["POST", "OPTIONS"])
            .allow_any_header();

        App::new()
            .wrap(TracingLogger::default())
            .wrap(cors)
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
            )
            .route("/", web::get().to(home))
            .route("/healthz", web::get().to(health_check))
            .app_data(relay_state.clone())
            .route("/slack", web::post().to(slack::<NS>))
            .route("/send-email", web::post().to(send_email::<NS>))
    })
    .listen(listener)?
    .run();

    Ok(server)
}

impl Application {
    pub async fn build<NS: NotificationService>(
        notification_service: NS,
        configuration: ApplicationSettings,
    ) -> Result<Self, std::io::Error> {
        let address = format!("{}:{}", configuration.host, configuration.port);
        let listener = TcpListener::bind(address)?;
        let port = listener.local_addr()?.port();

        let relay_state = SharedRelayState::new(notification_service);
        let server = run(listener, relay_state)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> Result<(), std::io::Error> {
        self.server.await
    }
}
