use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use crate::db::StoreError;

use super::types::{JsonResponseMessage, MessageType};

#[derive(Debug)]
pub enum ApiError {
    /// Missing or wrong access token. Checked before anything else.
    Forbidden,

    /// Empty read result or rejected body; `kind` carries the per-operation
    /// `info`/`error` distinction.
    NotFound { kind: MessageType, message: String },

    BadRequest(String),

    Unprocessable(String),

    /// Generic database failure; the status is fixed per operation.
    Database { status: StatusCode, message: String },

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forbidden => write!(f, "Forbidden"),
            Self::NotFound { message, .. } => write!(f, "Not found: {}", message),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unprocessable(msg) => write!(f, "Unprocessable: {}", msg),
            Self::Database { message, .. } => write!(f, "Database error: {}", message),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let envelope = match self {
            Self::Forbidden => {
                JsonResponseMessage::error(StatusCode::FORBIDDEN, "Acesso não autorizado.")
            }
            Self::NotFound { kind, message } => {
                JsonResponseMessage::new(StatusCode::NOT_FOUND, kind, message)
            }
            Self::BadRequest(message) => {
                JsonResponseMessage::error(StatusCode::BAD_REQUEST, message)
            }
            Self::Unprocessable(message) => {
                JsonResponseMessage::error(StatusCode::UNPROCESSABLE_ENTITY, message)
            }
            Self::Database { status, message } => {
                tracing::error!("Database error: {}", message);
                JsonResponseMessage::error(status, message)
            }
            Self::InternalError(message) => {
                tracing::error!("Internal error: {}", message);
                JsonResponseMessage::error(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        envelope.into_response()
    }
}

impl ApiError {
    pub const fn forbidden() -> Self {
        Self::Forbidden
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            kind: MessageType::Error,
            message: message.into(),
        }
    }

    pub fn not_found_info(message: impl Into<String>) -> Self {
        Self::NotFound {
            kind: MessageType::Info,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unprocessable(message: impl Into<String>) -> Self {
        Self::Unprocessable(message.into())
    }

    /// Translates a storage failure using the operation's status for the
    /// generic database category. Data errors are always 422 and anything
    /// unclassified resolves to 500 with the raw failure text.
    pub fn from_store(err: StoreError, database_status: StatusCode) -> Self {
        match err {
            StoreError::Data(message) => Self::Unprocessable(message),
            StoreError::Database(message) => Self::Database {
                status: database_status,
                message,
            },
            StoreError::Other(message) => Self::InternalError(message),
        }
    }
}
