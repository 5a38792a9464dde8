//! Diagnostics probe behind GET /test
//!
//! Every failure, including a panicking store, ends up as a status string in
//! the report. Nothing here returns an error.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::gateway::types::DiagnosticsReport;
use crate::store::DocumentStore;

/// Maximum number of collection names reported
pub const MAX_REPORTED_COLLECTIONS: usize = 10;

/// Error messages are cut to this many characters
const ERROR_DETAIL_CHARS: usize = 50;

const SET: &str = "✅ Set";
const NOT_SET: &str = "❌ Not Set";

/// Which connection settings were provided (presence only, never the values)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnvPresence {
    pub database_url: bool,
    pub database_name: bool,
}

impl EnvPresence {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            database_url: config.database.url.is_some(),
            database_name: config.database.name.is_some(),
        }
    }
}

pub async fn probe(store: Option<Arc<dyn DocumentStore>>, env: EnvPresence) -> DiagnosticsReport {
    let mut report = DiagnosticsReport {
        backend: "✅ Running".to_string(),
        database: "❌ Not Available".to_string(),
        database_url: presence(env.database_url),
        database_name: presence(env.database_name),
        connection_status: "Not Connected".to_string(),
        collections: Vec::new(),
    };

    let Some(store) = store else {
        report.database = "⚠️  Available but not initialized".to_string();
        return report;
    };

    report.database = "✅ Available".to_string();
    report.connection_status = "Connected".to_string();

    // Run introspection on its own task so a panicking store cannot take
    // the request down with it.
    let introspection = tokio::spawn(async move { store.list_collections().await }).await;

    match introspection {
        Ok(Ok(mut names)) => {
            names.truncate(MAX_REPORTED_COLLECTIONS);
            report.collections = names;
            report.database = "✅ Connected & Working".to_string();
        }
        Ok(Err(e)) => {
            tracing::warn!("[DIAG] Store introspection failed: {}", e);
            report.database = format!("⚠️  Connected but Error: {}", truncate(&e.to_string()));
        }
        Err(e) => {
            tracing::error!("[DIAG] Store introspection aborted: {}", e);
            report.database = format!("❌ Error: {}", truncate(&e.to_string()));
        }
    }

    report
}

fn presence(set: bool) -> String {
    let text = if set { SET } else { NOT_SET };
    text.to_string()
}

fn truncate(message: &str) -> String {
    message.chars().take(ERROR_DETAIL_CHARS).collect()
}
