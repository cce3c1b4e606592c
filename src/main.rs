use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use bfhl_server::config::load_config;
use bfhl_server::core::error::AppError;
use bfhl_server::features::ai::{GeminiClient, OneWordAnswerer};
use bfhl_server::features::bfhl::BfhlService;
use bfhl_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);
    if config.gemini.api_key.is_none() {
        tracing::warn!("GEMINI_API_KEY is not set; the AI operation will fail until it is");
    }

    let answerer: Arc<dyn OneWordAnswerer> = Arc::new(GeminiClient::new(config.clone())?);
    let service = Arc::new(BfhlService::new(answerer));
    let app = build_router(AppState::new(service));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, model = %config.gemini.model, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
