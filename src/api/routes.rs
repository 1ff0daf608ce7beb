// src/api/routes.rs
use actix_web::{error, web, HttpResponse};
use serde_json::json;
use super::handlers;

/// Registers the API routes. The static file service is mounted separately,
/// after these, because it claims every remaining path.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/run", web::post().to(handlers::run_code))
        .route("/health", web::get().to(handlers::health_check));
}

/// Malformed bodies and a missing `code` field are answered with 422.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let detail = err.to_string();
        log::debug!("Rejected request body: {}", detail);
        error::InternalError::from_response(
            err,
            HttpResponse::UnprocessableEntity().json(json!({ "detail": detail })),
        )
        .into()
    })
}
