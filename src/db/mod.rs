//! PostgreSQL document store
//!
//! All collections share one JSONB table; the `collection` column plays the
//! role of a collection name and the `BIGSERIAL` id gives insertion order.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::Row;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use sqlx::types::Json;

use crate::config::DatabaseConfig;
use crate::store::{Document, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};

const CREATE_DOCUMENTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS documents (
    id          BIGSERIAL PRIMARY KEY,
    collection  TEXT NOT NULL,
    body        JSONB NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now()
)"#;

const CREATE_COLLECTION_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS documents_collection_id_idx ON documents (collection, id)";

/// PostgreSQL-backed [`DocumentStore`]
pub struct PgDocumentStore {
    pool: PgPool,
    database: String,
}

impl PgDocumentStore {
    /// Create a connection pool; `DatabaseConfig::name` overrides the
    /// database selected by the URL.
    pub async fn connect(url: &str, config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let mut options = PgConnectOptions::from_str(url)?;
        if let Some(name) = &config.name {
            options = options.database(name);
        }
        let database = options.get_database().unwrap_or("postgres").to_string();

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await?;

        tracing::info!(database = %database, "PostgreSQL connection pool established");
        Ok(Self { pool, database })
    }

    /// Create the documents table if it does not exist yet
    pub async fn init_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_DOCUMENTS_TABLE)
            .execute(&self.pool)
            .await?;
        sqlx::query(CREATE_COLLECTION_INDEX)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    fn name(&self) -> &str {
        &self.database
    }

    async fn insert(&self, collection: &str, document: Document) -> StoreResult<DocumentId> {
        let row = sqlx::query("INSERT INTO documents (collection, body) VALUES ($1, $2) RETURNING id")
            .bind(collection)
            .bind(Json(Value::Object(document)))
            .fetch_one(&self.pool)
            .await?;

        Ok(DocumentId::from(row.try_get::<i64, _>("id")?))
    }

    async fn query(
        &self,
        collection: &str,
        filter: &Document,
        limit: usize,
    ) -> StoreResult<Vec<StoredDocument>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query(
            r#"SELECT id, body FROM documents
               WHERE collection = $1 AND body @> $2
               ORDER BY id
               LIMIT $3"#,
        )
        .bind(collection)
        .bind(Json(Value::Object(filter.clone())))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.iter()
            .map(|row| -> StoreResult<StoredDocument> {
                let id: i64 = row.try_get("id")?;
                let Json(body): Json<Value> = row.try_get("body")?;
                match body {
                    Value::Object(document) => Ok(StoredDocument {
                        id: DocumentId::from(id),
                        document,
                    }),
                    _ => Err(StoreError::NotAnObject {
                        collection: collection.to_string(),
                    }),
                }
            })
            .collect()
    }

    async fn list_collections(&self) -> StoreResult<Vec<String>> {
        let rows = sqlx::query("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("collection").map_err(StoreError::from))
            .collect()
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!(database = %self.database, "PostgreSQL connection pool closed");
    }
}
