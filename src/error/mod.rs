use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Fallback message for failures the caller cannot act on.
pub const GENERIC_ORDER_ERROR: &str =
    "Unexpected error while creating the payment order. Please try again.";

#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("{0}")]
    Validation(String),

    // Gateway rejected the request; status comes from the gateway response
    #[error("{message}")]
    Gateway { status: StatusCode, message: String },

    // HTTP errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Gateway { status, message } => {
                tracing::error!("Failed to create Razorpay order: {} - {}", status, message);
                (*status, message.clone())
            }
            AppError::HttpClient(e) => {
                tracing::error!("Failed to reach Razorpay: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ORDER_ERROR.to_string(),
                )
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ORDER_ERROR.to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERIC_ORDER_ERROR.to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { message });

        (status, body).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
