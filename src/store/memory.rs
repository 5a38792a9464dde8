//! In-memory document store
//!
//! Documents are kept per collection in insertion order. Identifiers come
//! from a single monotonically increasing counter shared by all collections.

use std::collections::BTreeMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;

use super::{
    Document, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument, matches_filter,
};

pub struct MemoryDocumentStore {
    name: String,
    next_id: AtomicI64,
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
}

impl MemoryDocumentStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next_id: AtomicI64::new(1),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of documents in a collection
    pub fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self::new("memory")
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
        let id = DocumentId::from(self.next_id.fetch_add(1, Ordering::SeqCst));
        let mut collections = self.collections.write().map_err(|_| StoreError::Poisoned)?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, document });
        Ok(id)
    }

    async fn query(
        &self,
        collection: &str,
        filter: &Document,
        limit: usize,
    ) -> StoreResult<Vec<StoredDocument>> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        let Some(docs) = collections.get(collection) else {
            return Ok(Vec::new());
        };

        Ok(docs
            .iter()
            .filter(|stored| matches_filter(&stored.document, filter))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let collections = self.collections.read().map_err(|_| StoreError::Poisoned)?;
        Ok(collections
            .iter()
            .filter(|(_, docs)| !docs.is_empty())
            .map(|(name, _)| name.clone())
            .collect())
    }
}
