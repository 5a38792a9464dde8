use std::sync::Arc;

use crate::store::DocumentStore;

use super::services::{CakeOrderService, EnvPresence};

/// Gateway application state (shared, immutable)
#[derive(Clone)]
pub struct AppState {
    /// Document store; `None` when no database could be opened at startup
    pub store: Option<Arc<dyn DocumentStore>>,
    /// Connection settings presence, reported by diagnostics
    pub env: EnvPresence,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, env: EnvPresence) -> Self {
        Self { store, env }
    }

    pub fn cake_service(&self) -> CakeOrderService {
        CakeOrderService::new(self.store.clone())
    }
}
