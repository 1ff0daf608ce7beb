// src/lib.rs
pub mod api;
pub mod banner;
pub mod config;
pub mod errors;
pub mod invokers;
pub mod models;
pub mod runner;
