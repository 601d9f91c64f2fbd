//! Error types for the HTTP endpoints.
//!
//! [`ApiError`] captures every way a request can be refused. It implements
//! [`IntoResponse`] so JSON handlers can return it directly; plain-text
//! handlers use [`ApiError::status`] together with its `Display` output.
//!
//! ## Error Cases
//! - `MissingParam`: a required query parameter was absent (400).
//! - `InvalidParam`: a query parameter could not be parsed (400).
//! - `InvalidBody`: the request body was malformed or incomplete (400).
//! - `NotFound`: the addressed record does not exist (404).
//! - `InvalidCredentials`: login was rejected (403).
//! - `TicketWindowClosed`: tickets are not taken at this hour (403).
//! - `Internal`: anything else (500).

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// JSON body used by every JSON endpoint for status messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub msg: String,
}

impl Message {
    pub fn new(msg: impl Into<String>) -> Self {
        Self { msg: msg.into() }
    }
}

/// Unified error type for the HTTP endpoints.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("no {0}")]
    MissingParam(&'static str),

    #[error("invalid {0}")]
    InvalidParam(&'static str),

    #[error("invalid body values")]
    InvalidBody,

    #[error("non-existent {0}")]
    NotFound(&'static str),

    #[error("invalid credentials!")]
    InvalidCredentials,

    #[error("tickets are accepted between 9:00 and 17:59")]
    TicketWindowClosed,

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MissingParam(_) | Self::InvalidParam(_) | Self::InvalidBody => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidCredentials | Self::TicketWindowClosed => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Renders the error as a `text/plain` response.
    pub fn into_plain_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

impl From<kata::Error> for ApiError {
    fn from(err: kata::Error) -> Self {
        match err {
            kata::Error::RecordNotFound(_) => Self::NotFound("user_id"),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(Message::new(self.to_string()))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_follow_error_class() {
        assert_eq!(ApiError::MissingParam("user_id").status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidBody.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound("user_id").status(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::InvalidCredentials.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn missing_record_maps_to_not_found() {
        let err = ApiError::from(kata::Error::RecordNotFound(9));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "non-existent user_id");
    }

    #[test]
    fn other_library_errors_are_internal() {
        let err = ApiError::from(kata::Error::OddInput(1));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
