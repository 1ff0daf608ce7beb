// src/invokers/ollama.rs

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use crate::config::InferenceConfig;
use crate::errors::Result;
use crate::invokers::{elapsed_ms, Invoker};
use crate::models::InvocationResult;

/// Talks to a local Ollama server over its REST API instead of spawning the CLI.
pub struct OllamaHttpInvoker {
    client: Client,
    config: InferenceConfig,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaHttpInvoker {
    pub fn new(client: Client, config: InferenceConfig) -> Self {
        Self { client, config }
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.config.api_base.trim_end_matches('/'))
    }
}

#[async_trait]
impl Invoker for OllamaHttpInvoker {
    fn engine_name(&self) -> &str {
        &self.config.engine_name
    }

    /// Non-2xx answers carry the server's error text and map to `Failure`,
    /// the same way a non-zero CLI exit does. A 2xx answer that is not a
    /// generate response is an error.
    async fn invoke(&self, text: &str) -> Result<InvocationResult> {
        let invocation_id = Uuid::new_v4();
        let url = self.generate_url();
        log::info!(
            "[{}] Posting to {} with model {} ({} bytes of input)",
            invocation_id,
            url,
            self.config.model,
            text.len()
        );

        let start = Instant::now();
        let resp = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                model: &self.config.model,
                prompt: text,
                stream: false,
            })
            .send()
            .await?;
        let status = resp.status();

        let outcome = if status.is_success() {
            let generated: GenerateResponse = resp.json().await?;
            InvocationResult::Success {
                text: generated.response,
            }
        } else {
            let message = match resp.text().await {
                Ok(body) if !body.is_empty() => body,
                _ => format!("HTTP {}", status),
            };
            InvocationResult::Failure { message }
        };

        log::info!(
            "[{}] {} answered {} after {}ms",
            invocation_id,
            url,
            status,
            elapsed_ms(start)
        );
        Ok(outcome)
    }
}
