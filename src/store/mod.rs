//! Document store abstraction
//!
//! Handlers never talk to a database directly; they go through
//! [`DocumentStore`], which is injected into the gateway state at startup.
//!
//! - [`MemoryDocumentStore`]: in-process store (tests, local runs)
//! - [`crate::db::PgDocumentStore`]: PostgreSQL JSONB store

pub mod memory;

use std::fmt;

use async_trait::async_trait;
use serde_json::{Map, Value};

pub use memory::MemoryDocumentStore;

/// A schema-free JSON object as stored in a collection
pub type Document = Map<String, Value>;

/// Key under which some stores expose their native identifier inside a document
pub const INTERNAL_ID_KEY: &str = "_id";

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// Identifiers
// ============================================================================

/// Store-assigned document identifier
///
/// Opaque to callers; the only guarantee is a stable string form via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId(i64);

impl From<i64> for DocumentId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A document read back from the store together with its identifier
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub document: Document,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document in collection '{collection}' is not a JSON object")]
    NotAnObject { collection: String },

    #[error("Store lock poisoned")]
    Poisoned,
}

// ============================================================================
// DocumentStore trait
// ============================================================================

/// Collection-addressed document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name, for diagnostics
    fn name(&self) -> &str;

    /// Insert one document and return the identifier the store assigned
    async fn insert(&self, collection: &str, document: Document) -> StoreResult<DocumentId>;

    /// Fetch up to `limit` documents whose fields contain `filter`,
    /// in insertion order
    async fn query(
        &self,
        collection: &str,
        filter: &Document,
        limit: usize,
    ) -> StoreResult<Vec<StoredDocument>>;

    /// Names of all non-empty collections, sorted
    async fn list_collections(&self) -> StoreResult<Vec<String>>;

    /// Release connections; called once after the server stops
    async fn close(&self) {}
}

/// Top-level containment: every key in `filter` is present in `document`
/// with an equal value. An empty filter matches everything.
pub fn matches_filter(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("test document must be an object"),
        }
    }

    #[test]
    fn test_document_id_string_form() {
        assert_eq!(DocumentId::from(42).to_string(), "42");
        assert_eq!(DocumentId::from(1).to_string(), DocumentId::from(1).to_string());
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let d = doc(json!({"size": "multi_layer"}));
        assert!(matches_filter(&d, &Document::new()));
    }

    #[test]
    fn test_filter_requires_equal_values() {
        let d = doc(json!({"size": "multi_layer", "customer_name": "Amy"}));
        assert!(matches_filter(&d, &doc(json!({"customer_name": "Amy"}))));
        assert!(!matches_filter(&d, &doc(json!({"customer_name": "Bob"}))));
        assert!(!matches_filter(&d, &doc(json!({"contact": "Amy"}))));
    }
}
