//! Error types for picalc

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Body written when `iterations` is missing or malformed.
pub const INVALID_ITERATIONS_BODY: &str = "iterations parameter not valid\n";

#[derive(Error, Debug)]
pub enum Error {
    #[error("iterations parameter not valid: {0}")]
    InvalidParameter(String),

    #[error("Computation failed: {0}")]
    Computation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Error::InvalidParameter(msg.into())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(err: tokio::task::JoinError) -> Self {
        Error::Computation(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        // Invalid input keeps the default 200 status; clients match on the body.
        let (status, body) = match &self {
            Error::InvalidParameter(_) => (StatusCode::OK, INVALID_ITERATIONS_BODY),
            Error::Computation(_) | Error::Io(_) => {
                tracing::error!(error = %self, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error\n")
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_keeps_ok_status() {
        let response = Error::invalid_parameter("missing").into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_computation_is_server_error() {
        let response = Error::Computation("task cancelled".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
