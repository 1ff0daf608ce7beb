// src/api/mod.rs
use actix_cors::Cors;

pub mod assets;
pub mod handlers;
pub mod routes;
pub mod state;

pub use assets::static_files;
pub use routes::configure_routes;
pub use state::AppState;

/// Any origin, method and header, with credentials allowed.
// TODO: restrict to the frontend's origin once it is served from a fixed host.
pub fn cors_policy() -> Cors {
    Cors::permissive()
}
