pub mod handlers;
pub mod types;

use crate::{companion::Companion, config::Config, llm, Result};
use axum::{routing::post, Router};
use handlers::AppState;
use std::{net::SocketAddr, path::Path, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

/// API routes plus the landing page and its assets served from `static_dir`.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/generate-name", post(handlers::generate_name))
        .route("/api/interpret-behavior", post(handlers::interpret_behavior))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let llm_client = llm::create_llm_client(&config.llm);

    let app_state = AppState {
        companion: Arc::new(Companion::new(llm_client)),
    };

    let app = router(app_state, &config.server.static_dir);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
