// src/models.rs
use serde::{Deserialize, Serialize};

/// Body of `POST /run`.
#[derive(Deserialize, Debug, Clone)]
pub struct CodeRequest {
    pub code: String,
}

/// Response of `POST /run`. Engine failures are reported inside
/// `updated_code` too, so callers check the text rather than the status.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CodeResponse {
    #[serde(rename = "updatedCode")]
    pub updated_code: String,
}

/// Outcome of one round-trip through the inference engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationResult {
    /// The engine exited cleanly; `text` is its decoded standard output.
    Success { text: String },
    /// The engine reported a failure; `message` is its decoded standard error.
    Failure { message: String },
}
