pub mod request_id;

pub use request_id::{request_id_middleware, X_REQUEST_ID};

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::controllers::{audio::AudioController, health, immersion::ImmersionController};
use crate::infrastructure::config::Config;

/// Build the application router with all routes configured
pub fn build_router(
    audio_controller: Arc<AudioController>,
    immersion_controller: Arc<ImmersionController>,
    output_dir: &Path,
) -> Router {
    let audio_routes = Router::new()
        .route("/api/audio/generate", post(AudioController::generate))
        .route("/api/audio/episodes", get(AudioController::list_episodes))
        .route(
            "/api/audio/episodes/:id",
            get(AudioController::get_episode).delete(AudioController::delete_episode),
        )
        .with_state(audio_controller);

    let immersion_routes = Router::new()
        .route("/api/immersion/generate", post(ImmersionController::generate))
        .route(
            "/api/immersion/generate-batch",
            post(ImmersionController::generate_batch),
        )
        .route("/api/immersion/translate", post(ImmersionController::translate))
        .route("/api/immersion/feed", get(ImmersionController::feed))
        .with_state(immersion_controller);

    Router::new()
        .route("/api/health", get(health::health))
        .merge(audio_routes)
        .merge(immersion_routes)
        .nest_service("/audio", ServeDir::new(output_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Serve `app` until ctrl-c, then cancel `shutdown` so in-flight pipeline
/// runs abort through their cleanup path.
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
    shutdown: CancellationToken,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal(shutdown: CancellationToken) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutdown signal received, cancelling in-flight runs");
            shutdown.cancel();
        }
        _ = shutdown.cancelled() => {}
    }
}
