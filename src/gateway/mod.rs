pub mod handlers;
pub mod openapi;
pub mod services;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use state::AppState;

/// Allow every origin, method and header, with credentials.
///
/// Browsers refuse `*` together with credentials, so the request's own
/// origin, method and headers are mirrored back instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Build the complete router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::read_root))
        .route(
            "/api/cakes",
            post(handlers::create_cake).get(handlers::list_cakes),
        )
        .route("/test", get(handlers::test_database))
        .with_state(state)
        // OpenAPI / Swagger UI (stateless, added after with_state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Serve until Ctrl-C / SIGTERM, then close the store
pub async fn run_server(addr: &str, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await.map_err(|e| {
        anyhow::anyhow!(
            "Failed to bind to {}: {} (the port may already be in use)",
            addr,
            e
        )
    })?;

    tracing::info!("🚀 Gateway listening on http://{}", addr);
    tracing::info!("📖 API Docs: http://{}/docs", addr);

    let app = router(state.clone());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped, releasing store");
    if let Some(store) = &state.store {
        store.close().await;
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("Shutdown signal received");
}
