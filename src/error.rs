use std::fmt;
use std::io;
use std::path::PathBuf;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors raised while loading the credential document at startup.
/// Any of these is fatal: the server never binds a listener.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("cannot read credential document {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed credential document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("credential document {path} defines no accounts")]
    Empty { path: PathBuf },
}

pub enum AppError {
    Unauthorized,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Unauthorized => write!(f, "unauthorized"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Unauthorized => {
                tracing::warn!(error_type = "unauthorized", "Responding with 401");
                (StatusCode::UNAUTHORIZED, "Unauthorized")
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
