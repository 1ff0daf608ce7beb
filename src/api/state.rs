// src/api/state.rs
use crate::config::AppConfig;
use crate::invokers::{self, Invoker};
use reqwest::Client;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub invoker: Arc<dyn Invoker>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let invoker = invokers::from_config(&config.inference, Client::new());
        Self::with_invoker(config, invoker)
    }

    /// Builds state around an explicit invoker, bypassing backend selection.
    pub fn with_invoker(config: AppConfig, invoker: Arc<dyn Invoker>) -> Self {
        Self {
            config: Arc::new(config),
            invoker,
        }
    }
}
