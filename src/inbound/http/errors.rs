use crate::domain::notification::ports::NotificationServiceError;

use actix_web::{http::StatusCode, HttpResponse, ResponseError};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Server configuration error: {0}")]
    ConfigurationError(String),
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<NotificationServiceError> for AppError {
    fn from(error: NotificationServiceError) -> Self {
        match error {
            NotificationServiceError::WebhookNotConfigured => {
                AppError::ConfigurationError(error.to_string())
            }
            NotificationServiceError::ValidationError(s) => AppError::ValidationError(s),
            NotificationServiceError::Unexpected(e) => AppError::Unexpected(e),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::ConfigurationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}
