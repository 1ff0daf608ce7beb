// src/invokers/mod.rs

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::config::{Backend, InferenceConfig};
use crate::errors::Result;
use crate::models::InvocationResult;

pub mod ollama;
pub mod process;

pub use ollama::OllamaHttpInvoker;
pub use process::ProcessInvoker;

/// A common trait for ways of reaching the inference engine.
///
/// An invoker takes the already-augmented prompt and reports what the engine
/// did with it. An engine that ran and failed is a normal outcome
/// (`InvocationResult::Failure`); `Err` is reserved for failures to reach the
/// engine at all.
#[async_trait]
pub trait Invoker: Send + Sync {
    /// Name shown to users in the `Error running <engine>:` prefix.
    fn engine_name(&self) -> &str;

    /// Runs one invocation of the engine against `text`.
    async fn invoke(&self, text: &str) -> Result<InvocationResult>;
}

/// Builds the invoker selected by `config.backend`.
pub fn from_config(config: &InferenceConfig, client: reqwest::Client) -> Arc<dyn Invoker> {
    match config.backend {
        Backend::Process => Arc::new(ProcessInvoker::from_config(config)),
        Backend::Http => Arc::new(OllamaHttpInvoker::new(client, config.clone())),
    }
}

/// Milliseconds since `start`, saturating instead of truncating.
pub(crate) fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
