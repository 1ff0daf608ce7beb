// src/config.rs
use std::fmt;
use std::path::PathBuf;

use crate::errors::{AppError, Result};

/// Which transport is used to reach the inference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// Spawn the engine CLI once per request and talk to it over stdio.
    Process,
    /// Post to the engine's local REST API.
    Http,
}

impl Backend {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "process" => Ok(Backend::Process),
            "http" => Ok(Backend::Http),
            other => Err(AppError::Config(format!(
                "Unknown INFERENCE_BACKEND '{}'. Expected 'process' or 'http'.",
                other
            ))),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Process => write!(f, "process"),
            Backend::Http => write!(f, "http"),
        }
    }
}

/// Configuration for the inference engine.
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    pub backend: Backend,
    /// Human readable engine name, used in the `Error running <engine>:` prefix.
    pub engine_name: String,
    pub command: String,
    pub subcommand: String,
    pub model: String,
    pub api_base: String,
}

impl InferenceConfig {
    /// The fixed argument list handed to the engine CLI, e.g. `["run", "llama3"]`.
    pub fn args(&self) -> Vec<String> {
        vec![self.subcommand.clone(), self.model.clone()]
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Process,
            engine_name: "Ollama".to_string(),
            command: "ollama".to_string(),
            subcommand: "run".to_string(),
            model: "llama3".to_string(),
            api_base: "http://localhost:11434".to_string(),
        }
    }
}

/// High-level application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub inference: InferenceConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            static_dir: PathBuf::from("static"),
            inference: InferenceConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup. Unset or blank
    /// keys fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = AppConfig::default();
        let inference_defaults = defaults.inference;

        let port = match get("ACE_PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| AppError::Config(format!("ACE_PORT must be a port number, got '{}'", raw)))?,
            None => defaults.port,
        };

        let backend = match get("INFERENCE_BACKEND") {
            Some(raw) => Backend::parse(&raw)?,
            None => inference_defaults.backend,
        };

        let inference = InferenceConfig {
            backend,
            engine_name: get("INFERENCE_ENGINE_NAME").unwrap_or(inference_defaults.engine_name),
            command: get("INFERENCE_COMMAND").unwrap_or(inference_defaults.command),
            subcommand: get("INFERENCE_SUBCOMMAND").unwrap_or(inference_defaults.subcommand),
            model: get("INFERENCE_MODEL").unwrap_or(inference_defaults.model),
            api_base: get("OLLAMA_API_BASE").unwrap_or(inference_defaults.api_base),
        };

        Ok(AppConfig {
            host: get("ACE_HOST").unwrap_or(defaults.host),
            port,
            static_dir: get("ACE_STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            inference,
        })
    }
}
