//! HTTP adapter mapping for domain and request errors.
//!
//! Purpose: keep the domain taxonomy HTTP-agnostic while giving every
//! failure a stable status code and `{"error", "details"}` body. This is the
//! only module that knows the wire vocabulary.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorKind};
use crate::middleware::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// JSON error envelope returned by every failing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Stable machine-readable code.
    #[schema(example = "username_exists")]
    pub error: String,
    /// Human-readable explanation. Generic for `500` responses.
    #[schema(example = "username already exists")]
    pub details: String,
}

impl ErrorBody {
    fn new(error: &str, details: impl Into<String>) -> Self {
        Self {
            error: error.to_owned(),
            details: details.into(),
        }
    }
}

/// Status code and wire code for a domain error kind.
///
/// Total over [`ErrorKind`]; adding a kind without a row here fails to
/// compile.
pub const fn wire_mapping(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::InvalidUsername => (StatusCode::BAD_REQUEST, "invalid_username"),
        ErrorKind::UsernameExists => (StatusCode::CONFLICT, "username_exists"),
        ErrorKind::UnknownConflict => (StatusCode::CONFLICT, "unknown_conflict"),
        ErrorKind::UserNotFound => (StatusCode::NOT_FOUND, "user_not_found"),
        ErrorKind::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
    }
}

/// Map a domain error to its status and response body.
///
/// `500` bodies are always generic. Client errors carry the kind
/// description, plus the validation reason for invalid usernames.
pub fn map_to_response(error: &Error) -> (StatusCode, ErrorBody) {
    let kind = error.kind();
    let (status, code) = wire_mapping(kind);
    let details = match (kind, error.detail()) {
        (ErrorKind::InvalidUsername, Some(reason)) => format!("{kind}: {reason}"),
        _ => kind.description().to_owned(),
    };
    (status, ErrorBody::new(code, details))
}

/// Request failures detected by the transport before any use case runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    /// Body was not valid JSON for the endpoint.
    #[error("invalid request body")]
    InvalidBody,
    /// A path segment or header was not a UUID.
    #[error("invalid user id {raw}")]
    InvalidUserId {
        /// Text as received.
        raw: String,
    },
    /// The caller identity header is missing or blank.
    #[error("unauthorized")]
    Unauthorized,
    /// The route exists but not for this method.
    #[error("method not allowed")]
    MethodNotAllowed,
}

impl RequestError {
    /// Status code and wire code for the failure.
    pub const fn wire_mapping(&self) -> (StatusCode, &'static str) {
        match self {
            Self::InvalidBody => (StatusCode::BAD_REQUEST, "invalid_request"),
            Self::InvalidUserId { .. } => (StatusCode::BAD_REQUEST, "invalid_user_id"),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            Self::MethodNotAllowed => (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed"),
        }
    }
}

/// Error type returned by HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Failure reported by a use case.
    #[error(transparent)]
    Domain(#[from] Error),
    /// Failure detected while decoding the request.
    #[error(transparent)]
    Request(#[from] RequestError),
}

impl ApiError {
    fn to_response_parts(&self) -> (StatusCode, ErrorBody) {
        match self {
            Self::Domain(err) => map_to_response(err),
            Self::Request(err) => {
                let (status, code) = err.wire_mapping();
                (status, ErrorBody::new(code, err.to_string()))
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        self.to_response_parts().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status, body) = self.to_response_parts();
        let trace_id = TraceId::current().map(|id| id.to_string());
        if status.is_server_error() {
            error!(error = %self, trace_id = ?trace_id, "request failed");
        } else {
            debug!(error = %self, trace_id = ?trace_id, status = status.as_u16(), "request rejected");
        }
        HttpResponse::build(status).json(body)
    }
}

impl From<actix_web::Error> for Error {
    fn from(err: actix_web::Error) -> Self {
        Error::internal(err.to_string())
    }
}

impl From<actix_web::Error> for ApiError {
    fn from(err: actix_web::Error) -> Self {
        Self::Domain(err.into())
    }
}

#[cfg(test)]
mod tests;
