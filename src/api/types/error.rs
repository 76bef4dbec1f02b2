//! HTTP error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

/// Error response body
///
/// The `{statusCode, message}` shape is the wire contract shared with the
/// web client; both field names are load-bearing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub message: String,
}

/// API error with status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Classify an error that reaches the boundary as a plain string.
    ///
    /// One legacy special case: token-expiry messages from foreign JWT
    /// libraries (anything mentioning both "jwt" and "expired") map to the
    /// stable 401 body instead of a 500. This shim is intentionally not
    /// generalized further.
    pub fn from_unclassified(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        if lower.contains("jwt") && lower.contains("expired") {
            return Self::unauthorized("JWT token expired");
        }

        Self::internal(message)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        let message = err.to_string();

        match err {
            DomainError::Unauthorized { .. }
            | DomainError::InvalidToken { .. }
            | DomainError::TokenExpired => Self::unauthorized(message),
            DomainError::InvalidTeam { .. } | DomainError::ProjectValidation { .. } => {
                Self::bad_request(message)
            }
            DomainError::TeamAccessForbidden { .. }
            | DomainError::ForbiddenProjectAccess { .. }
            | DomainError::ProjectArchived => Self::forbidden(message),
            DomainError::ProjectConflict { .. } | DomainError::UserConflict { .. } => {
                Self::conflict(message)
            }
            DomainError::ProjectNotFound | DomainError::UserNotFound => Self::not_found(message),
            DomainError::ProviderAuth { .. } | DomainError::PersonalTeamNotFound { .. } => {
                Self::internal(message)
            }
            // These carry raw messages from stores and foreign libraries, so
            // they go through the legacy classifier instead of a plain 500.
            DomainError::Configuration { .. }
            | DomainError::Storage { .. }
            | DomainError::Internal { .. } => Self::from_unclassified(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            status_code: self.status.as_u16(),
            message: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.message)
    }
}

impl std::error::Error for ApiError {}
