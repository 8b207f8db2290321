//! Error-to-response mapping for the HTTP boundary.
//!
//! Every failure maps to exactly one disjoint response outcome with a JSON
//! `{"error": ...}` envelope. Authentication failures use a single generic
//! message so the response never reveals which check failed; persistence
//! detail is logged server-side and replaced with a generic body.

use crate::identity::{ports::CredentialRepositoryError, services::CredentialServiceError};
use crate::session::domain::SessionError;
use crate::task::{domain::TaskDomainError, ports::TaskRepositoryError, services::TaskAccessError};
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use super::payloads::ErrorBody;

/// Boundary-level request failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Malformed or missing required input.
    Validation(String),
    /// Bad credentials at login.
    AuthFailed,
    /// Missing, malformed, expired, or forged session token.
    Unauthorized,
    /// The task does not exist for the authenticated owner.
    NotFound,
    /// The username is already registered.
    Conflict,
    /// The persistence layer is unreachable; safe to retry.
    Unavailable,
    /// Unexpected server-side failure.
    Internal,
}

impl ApiError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthFailed | Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Validation(detail) => detail.clone(),
            Self::AuthFailed => "invalid username or password".to_owned(),
            Self::Unauthorized => "invalid or missing session token".to_owned(),
            Self::NotFound => "task not found".to_owned(),
            Self::Conflict => "username already taken".to_owned(),
            Self::Unavailable => "storage temporarily unavailable".to_owned(),
            Self::Internal => "internal error".to_owned(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<CredentialServiceError> for ApiError {
    fn from(err: CredentialServiceError) -> Self {
        match err {
            CredentialServiceError::Domain(domain_err) => Self::Validation(domain_err.to_string()),
            CredentialServiceError::UsernameTaken(_) => Self::Conflict,
            CredentialServiceError::InvalidCredentials => Self::AuthFailed,
            CredentialServiceError::Hashing(hash_err) => {
                tracing::error!(error = %hash_err, "password hashing failed");
                Self::Internal
            }
            CredentialServiceError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<CredentialRepositoryError> for ApiError {
    fn from(err: CredentialRepositoryError) -> Self {
        match err {
            CredentialRepositoryError::DuplicateUsername(_) => Self::Conflict,
            CredentialRepositoryError::DuplicateUser(_) => Self::Internal,
            CredentialRepositoryError::Persistence(source) => {
                tracing::error!(error = %source, "credential store unavailable");
                Self::Unavailable
            }
        }
    }
}

impl From<TaskAccessError> for ApiError {
    fn from(err: TaskAccessError) -> Self {
        match err {
            TaskAccessError::Unauthorized => Self::Unauthorized,
            TaskAccessError::Domain(domain_err) => Self::Validation(domain_err.to_string()),
            TaskAccessError::NotFound(_) => Self::NotFound,
            TaskAccessError::Repository(repo_err) => repo_err.into(),
        }
    }
}

impl From<TaskRepositoryError> for ApiError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::DuplicateTask(_) => Self::Internal,
            TaskRepositoryError::Persistence(source) => {
                tracing::error!(error = %source, "task store unavailable");
                Self::Unavailable
            }
        }
    }
}

impl From<TaskDomainError> for ApiError {
    fn from(err: TaskDomainError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::Invalid => Self::Unauthorized,
            SessionError::Issuance => Self::Internal,
        }
    }
}
