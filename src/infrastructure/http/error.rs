//! HTTP Error Handling
//!
//! 所有错误响应都只有状态码，没有响应体

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ApplicationError;
use crate::domain::ingestion::IngestionError;

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    RequestTimeout(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::RequestTimeout(_) => StatusCode::REQUEST_TIMEOUT,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Bad request");
            }
            ApiError::RequestTimeout(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Request body timed out");
            }
            ApiError::PayloadTooLarge(msg) => {
                tracing::warn!(status = status.as_u16(), error = %msg, "Payload too large");
            }
            ApiError::Internal(msg) => {
                tracing::error!(status = status.as_u16(), error = %msg, "Internal server error");
            }
        }

        status.into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::Domain(IngestionError::PayloadTooLarge { .. }) => {
                ApiError::PayloadTooLarge(e.to_string())
            }
            ApplicationError::Domain(IngestionError::InvalidLimit(msg)) => ApiError::Internal(msg),
            ApplicationError::BodyRead(msg) => ApiError::BadRequest(msg),
            ApplicationError::ReadTimeout(_) => ApiError::RequestTimeout(e.to_string()),
            ApplicationError::Spool(_) => ApiError::Internal(e.to_string()),
        }
    }
}
