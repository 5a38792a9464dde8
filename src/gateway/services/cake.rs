//! Cake order service - persistence logic behind the order endpoints
//!
//! Handlers stay thin HTTP adapters; this is where validated orders become
//! stored documents and stored documents become client-facing items.

use std::sync::Arc;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::models::{CAKE_ORDER_COLLECTION, CakeOrder};
use crate::store::{
    Document, DocumentId, DocumentStore, INTERNAL_ID_KEY, StoreError, StoredDocument,
};

/// Listing size when the client gives no usable limit
pub const DEFAULT_LIST_LIMIT: usize = 50;

#[derive(Debug, thiserror::Error)]
pub enum CakeOrderError {
    #[error("Database not available")]
    StoreUnavailable,

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub struct CakeOrderService {
    store: Option<Arc<dyn DocumentStore>>,
}

impl CakeOrderService {
    pub fn new(store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self { store }
    }

    fn store(&self) -> Result<&dyn DocumentStore, CakeOrderError> {
        self.store.as_deref().ok_or(CakeOrderError::StoreUnavailable)
    }

    /// Store one order. Every call inserts a new document; resubmitting the
    /// same order creates a duplicate.
    pub async fn create_order(&self, order: CakeOrder) -> Result<DocumentId, CakeOrderError> {
        let store = self.store()?;
        let document = order_document(&order)?;

        let id = store.insert(CAKE_ORDER_COLLECTION, document).await?;
        tracing::info!(id = %id, size = %order.size, "Cake order stored");
        Ok(id)
    }

    /// Fetch up to `limit` orders in store order, shaped for clients
    pub async fn list_orders(&self, limit: Option<i64>) -> Result<Vec<Document>, CakeOrderError> {
        let store = self.store()?;
        let limit = effective_limit(limit);

        let docs = store
            .query(CAKE_ORDER_COLLECTION, &Document::new(), limit)
            .await?;
        tracing::debug!(limit, returned = docs.len(), "Listed cake orders");

        Ok(docs.into_iter().map(into_item).collect())
    }
}

/// `None` and zero fall back to [`DEFAULT_LIST_LIMIT`]. A negative limit
/// caps the listing at its magnitude, as a cursor limit would.
pub fn effective_limit(limit: Option<i64>) -> usize {
    match limit {
        None | Some(0) => DEFAULT_LIST_LIMIT,
        Some(n) => usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX),
    }
}

/// Serialize an order and stamp `created_at` / `updated_at`
fn order_document(order: &CakeOrder) -> Result<Document, StoreError> {
    let Value::Object(mut document) = serde_json::to_value(order)? else {
        return Err(StoreError::NotAnObject {
            collection: CAKE_ORDER_COLLECTION.to_string(),
        });
    };

    let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    document.insert("created_at".to_string(), Value::String(now.clone()));
    document.insert("updated_at".to_string(), Value::String(now));
    Ok(document)
}

/// Expose the identifier as a string `id` and drop the internal key
fn into_item(stored: StoredDocument) -> Document {
    let StoredDocument { id, mut document } = stored;
    document.remove(INTERNAL_ID_KEY);
    document.insert("id".to_string(), Value::String(id.to_string()));
    document
}
