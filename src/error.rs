// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::{ErrorBody, FieldError, ValidationErrorBody};
use crate::services::validator::ValidationError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected message on the main chat path (422).
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Rejected message on the manual-validation path (400).
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Body could not be decoded as JSON (422).
    #[error("invalid body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(e) => {
                let body = ValidationErrorBody {
                    error: "validation_error".to_string(),
                    detail: vec![FieldError {
                        field: e.field().to_string(),
                        reason: e.reason(),
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AppError::BadRequest(reason) => {
                (StatusCode::BAD_REQUEST, Json(ErrorBody { error: reason })).into_response()
            }
            AppError::InvalidBody(rejection) => {
                let body = ValidationErrorBody {
                    error: "invalid_body".to_string(),
                    detail: vec![FieldError {
                        field: "body".to_string(),
                        reason: rejection.body_text(),
                    }],
                };
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            AppError::Internal(context) => {
                tracing::error!(%context, "request failed");
                let body = ErrorBody { error: "Internal server error".to_string() };
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}
