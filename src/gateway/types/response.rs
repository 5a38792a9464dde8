//! Response types and the HTTP error type
//!
//! Bodies are unwrapped (no envelope) so existing bakery clients keep
//! working: success payloads are returned as-is and errors as
//! `{"detail": "..."}`.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::CakeOrderError;
use crate::models::ValidationError;
use crate::store::Document;

// ============================================================================
// Response DTOs
// ============================================================================

/// GET / response
#[derive(Debug, Serialize, ToSchema)]
pub struct RootResponse {
    #[schema(example = "Divine Flavours API is running")]
    pub message: String,
}

/// POST /api/cakes response
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateCakeResponse {
    /// Store-assigned identifier, always a string
    #[schema(example = "17")]
    pub id: String,
}

/// GET /api/cakes response
#[derive(Debug, Serialize, ToSchema)]
pub struct CakeListResponse {
    /// Stored orders, each with a string `id`
    #[schema(value_type = Vec<Object>)]
    pub items: Vec<Document>,
}

/// GET /test response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DiagnosticsReport {
    #[schema(example = "✅ Running")]
    pub backend: String,
    #[schema(example = "✅ Connected & Working")]
    pub database: String,
    #[schema(example = "✅ Set")]
    pub database_url: String,
    #[schema(example = "❌ Not Set")]
    pub database_name: String,
    #[schema(example = "Connected")]
    pub connection_status: String,
    pub collections: Vec<String>,
}

// ============================================================================
// ApiError
// ============================================================================

/// Error body
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "Invalid size")]
    pub detail: String,
}

/// HTTP error with a status and a client-facing detail message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            detail: detail.into(),
        }
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, detail)
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::UNPROCESSABLE_ENTITY, detail)
    }

    pub fn service_unavailable(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, detail)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { detail: self.detail })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<CakeOrderError> for ApiError {
    fn from(err: CakeOrderError) -> Self {
        match &err {
            CakeOrderError::StoreUnavailable => Self::service_unavailable(err.to_string()),
            CakeOrderError::Store(e) => {
                tracing::error!("Store operation failed: {}", e);
                Self::internal()
            }
        }
    }
}

/// Malformed JSON is reported as 422 alongside shape errors; other
/// rejections keep axum's status.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => Self::unprocessable(e.body_text()),
            other => Self::new(other.status(), other.body_text()),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::unprocessable(format!("Failed to parse the request body as JSON: {}", err))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_invalid_size_maps_to_400() {
        let err = ApiError::from(ValidationError::InvalidSize("huge".into()));
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.detail, "Invalid size");
    }

    #[test]
    fn test_store_unavailable_maps_to_503() {
        let err = ApiError::from(CakeOrderError::StoreUnavailable);
        assert_eq!(err.status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(err.detail, "Database not available");
    }

    #[test]
    fn test_store_failure_does_not_leak_details() {
        let err = ApiError::from(CakeOrderError::Store(StoreError::Poisoned));
        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.detail.contains("poisoned"));
    }

    #[test]
    fn test_body_decode_error_maps_to_422() {
        let err = serde_json::from_str::<serde_json::Value>("{\"size\":").unwrap_err();
        let err = ApiError::from(err);
        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(err.detail.starts_with("Failed to parse"));
    }
}
