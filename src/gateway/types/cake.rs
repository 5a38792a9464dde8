//! Cake order request types and validation
//!
//! - `CreateCakeOrder`: HTTP request deserialization
//! - `validate_cake_order`: turns a request into a domain [`CakeOrder`]
//! - `ValidatedCakeOrder`: Axum extractor doing both, before the handler runs

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::models::{CakeOrder, CakeSize, ValidationError};

use super::response::ApiError;

// ============================================================================
// CreateCakeOrder: HTTP Request Deserialization
// ============================================================================

/// Cake order submission
///
/// `size` is kept as a plain string here so that an unknown value is reported
/// as "Invalid size" rather than as a generic decoding failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateCakeOrder {
    /// One of `small_1_layer`, `big_1_layer`, `multi_layer`
    #[schema(example = "small_1_layer")]
    pub size: String,
    /// Free-text description, 1 to 1000 characters
    #[schema(example = "Happy Birthday")]
    pub description: String,
    /// Image data URL, stored untouched
    #[schema(example = "data:image/png;base64,iVBORw0KGgo=")]
    pub image_base64: String,
    #[serde(default)]
    #[schema(example = "Amy")]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
}

/// Validate a submission. `size` is checked first, so a request that is
/// wrong in several ways always reports "Invalid size".
pub fn validate_cake_order(req: CreateCakeOrder) -> Result<CakeOrder, ValidationError> {
    let size: CakeSize = req.size.parse()?;
    CakeOrder::new(
        size,
        req.description,
        req.image_base64,
        req.customer_name,
        req.contact,
    )
}

// ============================================================================
// ValidatedCakeOrder: Axum Framework Integration
// ============================================================================

/// Extractor that decodes the JSON body and validates it, so handlers only
/// ever see a valid [`CakeOrder`].
///
/// A body sent without any `Content-Type` is still read as JSON; a
/// declared non-JSON type is rejected with 415.
#[derive(Debug)]
pub struct ValidatedCakeOrder(pub CakeOrder);

impl<S> FromRequest<S> for ValidatedCakeOrder
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body: CreateCakeOrder = if req.headers().contains_key(header::CONTENT_TYPE) {
            let Json(body) = Json::<CreateCakeOrder>::from_request(req, state).await?;
            body
        } else {
            let bytes = Bytes::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::new(rejection.status(), rejection.body_text()))?;
            serde_json::from_slice(&bytes)?
        };

        let order = validate_cake_order(body).inspect_err(|e| {
            tracing::info!("Rejected cake order: {:?}", e);
        })?;

        Ok(ValidatedCakeOrder(order))
    }
}

// ============================================================================
// Listing
// ============================================================================

/// GET /api/cakes query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCakesQuery {
    /// Maximum number of orders; absent or zero means 50, negative means its magnitude
    pub limit: Option<i64>,
}
