//! Gateway types module
//!
//! ## Input Types
//! - [`CreateCakeOrder`]: Order deserialization from HTTP requests
//! - [`ValidatedCakeOrder`]: Axum extractor for framework-level validation
//! - [`ListCakesQuery`]: Listing query parameters
//!
//! ## Output Types
//! - [`ApiError`]: `{"detail": ...}` error responses
//! - Response DTOs for every endpoint

pub mod cake;
pub mod response;

pub use cake::{CreateCakeOrder, ListCakesQuery, ValidatedCakeOrder, validate_cake_order};
pub use response::{
    ApiError, ApiResult, CakeListResponse, CreateCakeResponse, DiagnosticsReport, ErrorBody,
    RootResponse,
};
