//! Divine Flavours API server
//!
//! ```text
//! ┌──────────┐    ┌──────────┐    ┌──────────┐
//! │  Config  │───▶│  Store   │───▶│ Gateway  │
//! │(YAML+env)│    │(PG / mem)│    │  (axum)  │
//! └──────────┘    └──────────┘    └──────────┘
//! ```
//!
//! Usage: `divine_flavours [--env dev] [--port 8000]`

use std::sync::Arc;

use divine_flavours::config::{AppConfig, DatabaseConfig};
use divine_flavours::gateway::{self, services::EnvPresence, state::AppState};
use divine_flavours::{DocumentStore, MemoryDocumentStore, PgDocumentStore};

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    std::env::var("APP_ENV").unwrap_or_else(|_| "dev".to_string())
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

/// Open the configured store.
///
/// A database that cannot be reached is logged and leaves the server
/// running without a store, so diagnostics can still report on it.
async fn open_store(config: &DatabaseConfig) -> Option<Arc<dyn DocumentStore>> {
    match &config.url {
        Some(url) => match PgDocumentStore::connect(url, config).await {
            Ok(store) => match store.init_schema().await {
                Ok(()) => {
                    tracing::info!("✅ PostgreSQL connected and schema initialized");
                    Some(Arc::new(store))
                }
                Err(e) => {
                    tracing::error!("❌ Failed to initialize schema: {}", e);
                    store.close().await;
                    None
                }
            },
            Err(e) => {
                tracing::error!("❌ Failed to connect to PostgreSQL: {}", e);
                None
            }
        },
        None if config.memory_fallback => {
            tracing::warn!("⚠️  No database URL set, using in-memory store (data is not persisted)");
            Some(Arc::new(MemoryDocumentStore::new("memory")))
        }
        None => {
            tracing::warn!("⚠️  No database URL set, order endpoints are disabled");
            None
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let mut app_config = AppConfig::load(&env)?;
    if let Some(port) = get_port_override() {
        app_config.server.port = port;
    }
    let _log_guard = divine_flavours::logging::init_logging(&app_config)?;

    tracing::info!(
        "Starting Divine Flavours API in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let store = open_store(&app_config.database).await;
    let state = Arc::new(AppState::new(store, EnvPresence::from_config(&app_config)));

    gateway::run_server(&app_config.bind_addr(), state).await
}
