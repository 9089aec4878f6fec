//! Error Types
//!
//! `AppError` is what a request handler can fail with; it always renders as
//! the `{ error, error_msg }` JSON envelope the frontend expects.
//! `ServerError` covers startup.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Beer ID is required")]
    MissingId,

    #[error("Invalid beer ID: {0}")]
    InvalidId(String),

    #[error("API Error: {status} {reason}")]
    Upstream { status: u16, reason: String },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Upstream returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Wire shape of every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: bool,
    pub error_msg: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingId | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::Upstream { .. } | AppError::Transport(_) | AppError::Decode(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: true,
            error_msg: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}
