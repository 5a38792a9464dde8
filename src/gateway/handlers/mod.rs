//! HTTP handlers
//!
//! - [`cakes`]: order submission and listing
//! - [`diagnostics`]: GET /test
//! - [`root`]: GET /

pub mod cakes;
pub mod diagnostics;
pub mod root;

pub use cakes::{create_cake, list_cakes};
pub use diagnostics::test_database;
pub use root::read_root;

