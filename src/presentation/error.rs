use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::domain::error::{DomainError, ValidationError};

pub const VALIDATION_ERROR_REASON: &str = "ValidationError";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON body";

/// json for error response, `code` mirrors the HTTP status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    pub fn validation(err: &ValidationError) -> Self {
        let status = StatusCode::UNPROCESSABLE_ENTITY;
        Self {
            status,
            body: ErrorBody {
                code: status.as_u16(),
                reason: Some(VALIDATION_ERROR_REASON.to_string()),
                message: err.message().to_string(),
                location: Some(err.location().to_string()),
            },
        }
    }

    /// Body that is not parseable JSON
    pub fn malformed_body() -> Self {
        let status = StatusCode::BAD_REQUEST;
        Self {
            status,
            body: ErrorBody {
                code: status.as_u16(),
                reason: None,
                message: MALFORMED_BODY_MESSAGE.to_string(),
                location: None,
            },
        }
    }

    /// Detail stays in the server log, the client only sees a generic message
    pub fn internal() -> Self {
        let status = StatusCode::INTERNAL_SERVER_ERROR;
        Self {
            status,
            body: ErrorBody {
                code: status.as_u16(),
                reason: None,
                message: INTERNAL_ERROR_MESSAGE.to_string(),
                location: None,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn body(&self) -> &ErrorBody {
        &self.body
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::validation(&err)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(e) => Self::validation(&e),
            other => {
                error!(error = %other, "unexpected failure while handling request");
                Self::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
