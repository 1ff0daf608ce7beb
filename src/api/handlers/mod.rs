// src/api/handlers/mod.rs
mod health;
mod run;

pub use health::health_check;
pub use run::run_code;
