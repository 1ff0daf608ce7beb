// src/errors.rs
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to start inference engine '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while talking to the inference engine: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response from inference engine: {0}")]
    Engine(String),
}

/// Anything that reaches the HTTP layer as an `AppError` failed before the
/// engine produced an exit status, so it is reported as a server error.
/// Engine exits are never errors; they travel as `InvocationResult::Failure`.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::InternalServerError().json(json!({
            "error": self.to_string()
        }))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
