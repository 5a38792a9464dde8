//! Divine Flavours - bakery order backend
//!
//! Accepts custom cake orders and lists them back, on top of a document store.
//!
//! # Modules
//!
//! - [`models`] - Cake order domain types and validation
//! - [`store`] - Document store trait and in-memory implementation
//! - [`db`] - PostgreSQL document store
//! - [`gateway`] - HTTP server (axum): handlers, services, OpenAPI
//! - [`config`] - YAML + environment configuration
//! - [`logging`] - tracing subscriber setup

pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use config::AppConfig;
pub use db::PgDocumentStore;
pub use gateway::state::AppState;
pub use models::{CakeOrder, CakeSize, ValidationError};
pub use store::{DocumentId, DocumentStore, MemoryDocumentStore, StoreError};
