use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::core::envelope::ApiEnvelope;
use crate::core::error::AppError;
use crate::server::AppState;

pub async fn handle_bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiEnvelope>, AppError> {
    let Json(payload) = payload.map_err(rejection_to_error)?;
    let data = state.service.dispatch(payload).await?;
    Ok(Json(ApiEnvelope::success(data)))
}

pub async fn handle_healthcheck() -> Json<ApiEnvelope> {
    Json(ApiEnvelope::healthy())
}

pub async fn handle_not_found() -> AppError {
    AppError::not_found("route not found")
}

pub async fn handle_method_not_allowed(method: Method) -> AppError {
    AppError::method_not_allowed(format!("method {method} is not allowed on this route"))
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(rejection.body_text())
    } else {
        AppError::invalid_shape(format!("invalid JSON body: {}", rejection.body_text()))
    }
}
