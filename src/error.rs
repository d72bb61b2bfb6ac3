use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::tron::TronError;

/// Every failure the service can surface, with one total mapping to an
/// HTTP status in `IntoResponse` below. Handlers never pick status codes
/// themselves.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Address failed structural validation, or the chain has no account
    /// for it. User-correctable.
    #[error("{0}")]
    InvalidAddress(String),

    /// Transport-level failure talking to the Tron node. Possibly transient.
    #[error("Network error when accessing Tron API: {0}")]
    ChainUnavailable(String),

    /// Malformed request body or query parameters.
    #[error("{0}")]
    Validation(String),

    #[error("Unexpected error: {0}")]
    Internal(String),
}

impl From<TronError> for AppError {
    fn from(err: TronError) -> Self {
        match err {
            TronError::InvalidAddress | TronError::AccountNotFound => {
                AppError::InvalidAddress(err.to_string())
            }
            TronError::Transport(cause) => AppError::ChainUnavailable(cause),
            TronError::Unexpected(cause) => AppError::Internal(cause),
        }
    }
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidAddress(_) => StatusCode::BAD_REQUEST,
            AppError::ChainUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            detail: self.to_string(),
        });

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
