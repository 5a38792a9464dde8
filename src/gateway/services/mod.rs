//! Gateway Services Layer
//!
//! Business logic extracted from handlers.
//! Handlers are thin HTTP adapters that delegate to services.

pub mod cake;
pub mod diagnostics;

pub use cake::{CakeOrderError, CakeOrderService, DEFAULT_LIST_LIMIT};
pub use diagnostics::{EnvPresence, probe};
