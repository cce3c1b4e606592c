use std::any::Any;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::core::error::AppError;
use crate::features::bfhl::{
    handle_bfhl, handle_healthcheck, handle_method_not_allowed, handle_not_found,
};
use crate::server::AppState;

pub const MAX_BODY_BYTES: usize = 50 * 1024;

pub fn build_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        .route(
            "/health",
            get(handle_healthcheck).fallback(handle_method_not_allowed),
        )
        .route(
            "/bfhl",
            post(handle_bfhl).fallback(handle_method_not_allowed),
        )
        .fallback(handle_not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        .with_state(state)
}

fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(%detail, "handler panicked");

    AppError::internal("unexpected server error").into_response()
}
