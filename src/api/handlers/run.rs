// src/api/handlers/run.rs
use actix_web::{web, HttpResponse};
use crate::api::AppState;
use crate::errors::AppError;
use crate::models::{CodeRequest, CodeResponse};
use crate::runner;

/// `POST /run`: augments the submitted code and returns the engine's answer.
///
/// Engine failures still answer 200, with the error text in `updatedCode`.
/// Only a failure to reach the engine at all surfaces as a 500.
pub async fn run_code(
    state: web::Data<AppState>,
    req: web::Json<CodeRequest>,
) -> Result<HttpResponse, AppError> {
    let request = req.into_inner();
    let updated_code = runner::run_code(state.invoker.as_ref(), &request.code)
        .await
        .inspect_err(|e| log::error!("POST /run failed: {}", e))?;

    Ok(HttpResponse::Ok().json(CodeResponse { updated_code }))
}
