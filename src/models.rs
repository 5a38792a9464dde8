// models.rs - Cake order domain types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Collection holding every submitted cake order
pub const CAKE_ORDER_COLLECTION: &str = "cakeorder";

/// Description length bounds, counted in characters
pub const DESCRIPTION_MIN_CHARS: usize = 1;
pub const DESCRIPTION_MAX_CHARS: usize = 1000;

/// Cake size selection
///
/// The wire names are fixed; clients send exactly these strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CakeSize {
    #[serde(rename = "small_1_layer")]
    Small1Layer,
    #[serde(rename = "big_1_layer")]
    Big1Layer,
    #[serde(rename = "multi_layer")]
    MultiLayer,
}

impl CakeSize {
    pub const ALL: [CakeSize; 3] = [Self::Small1Layer, Self::Big1Layer, Self::MultiLayer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small1Layer => "small_1_layer",
            Self::Big1Layer => "big_1_layer",
            Self::MultiLayer => "multi_layer",
        }
    }
}

impl fmt::Display for CakeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CakeSize {
    type Err = ValidationError;

    /// Exact, case-sensitive match against the three wire names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| ValidationError::InvalidSize(s.to_string()))
    }
}

// ============================================================
// Validation Errors
// ============================================================

/// Client input errors detected before anything is persisted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid size")]
    InvalidSize(String),

    #[error("Invalid description")]
    InvalidDescription { chars: usize },
}

// ============================================================
// CakeOrder (validated)
// ============================================================

/// A validated cake order, ready to be stored
///
/// Absent optionals serialize as `null` so every stored document
/// carries the same set of keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CakeOrder {
    pub size: CakeSize,
    pub description: String,
    /// Opaque payload (usually a `data:` URL); never decoded
    pub image_base64: String,
    pub customer_name: Option<String>,
    pub contact: Option<String>,
}

impl CakeOrder {
    /// Build an order, enforcing the description bounds
    pub fn new(
        size: CakeSize,
        description: String,
        image_base64: String,
        customer_name: Option<String>,
        contact: Option<String>,
    ) -> Result<Self, ValidationError> {
        let chars = description.chars().count();
        if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&chars) {
            return Err(ValidationError::InvalidDescription { chars });
        }

        Ok(Self {
            size,
            description,
            image_base64,
            customer_name,
            contact,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order_with_description(description: &str) -> Result<CakeOrder, ValidationError> {
        CakeOrder::new(
            CakeSize::Small1Layer,
            description.to_string(),
            "data:image/png;base64,AAAA".to_string(),
            None,
            None,
        )
    }

    #[test]
    fn test_size_parses_wire_names() {
        assert_eq!("small_1_layer".parse::<CakeSize>(), Ok(CakeSize::Small1Layer));
        assert_eq!("big_1_layer".parse::<CakeSize>(), Ok(CakeSize::Big1Layer));
        assert_eq!("multi_layer".parse::<CakeSize>(), Ok(CakeSize::MultiLayer));
    }

    #[test]
    fn test_size_rejects_everything_else() {
        for bad in ["", "SMALL_1_LAYER", "small", "small_1_layer ", "medium", "multi-layer"] {
            assert_eq!(
                bad.parse::<CakeSize>(),
                Err(ValidationError::InvalidSize(bad.to_string())),
                "{bad:?} must be rejected"
            );
        }
    }

    #[test]
    fn test_size_serde_matches_as_str() {
        for size in CakeSize::ALL {
            let json = serde_json::to_string(&size).unwrap();
            assert_eq!(json, format!("\"{}\"", size.as_str()));
        }
    }

    #[test]
    fn test_invalid_size_message_is_fixed() {
        let err = ValidationError::InvalidSize("huge".to_string());
        assert_eq!(err.to_string(), "Invalid size");
    }

    #[test]
    fn test_description_bounds() {
        assert!(order_with_description("x").is_ok());
        assert!(order_with_description(&"x".repeat(1000)).is_ok());

        assert_eq!(
            order_with_description(""),
            Err(ValidationError::InvalidDescription { chars: 0 })
        );
        assert_eq!(
            order_with_description(&"x".repeat(1001)),
            Err(ValidationError::InvalidDescription { chars: 1001 })
        );
    }

    #[test]
    fn test_description_counts_chars_not_bytes() {
        // 1000 two-byte characters is still within bounds
        assert!(order_with_description(&"é".repeat(1000)).is_ok());
    }

    #[test]
    fn test_optionals_serialize_as_null() {
        let order = order_with_description("Happy Birthday").unwrap();
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["size"], "small_1_layer");
        assert!(value["customer_name"].is_null());
        assert!(value["contact"].is_null());
    }
}
