//! Production record domain types.
//!
//! A production record tracks a run of a product on the factory floor.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Resource;

/// A production run of a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductionRecord {
    /// Production ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Product ID being produced.
    #[schema(example = 1)]
    pub product_id: i64,
    /// Quantity produced.
    #[schema(example = 50)]
    pub quantity: i64,
    /// Production status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "In Progress")]
    pub status: Option<String>,
    /// Production timestamp. Kept as text, not parsed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "2024-11-25T12:00:00Z")]
    pub timestamp: Option<String>,
}

impl ProductionRecord {
    fn new(id: i64, product_id: i64, quantity: i64, status: &str, timestamp: &str) -> Self {
        Self {
            id: Some(id),
            product_id,
            quantity,
            status: Some(status.to_string()),
            timestamp: Some(timestamp.to_string()),
        }
    }
}

impl Resource for ProductionRecord {
    const LABEL: &'static str = "Production record";
    const KEY: &'static str = "production";

    fn catalog() -> Vec<Self> {
        vec![
            ProductionRecord::new(1, 1, 50, "Completed", "2024-11-25T12:00:00Z"),
            ProductionRecord::new(2, 2, 30, "In Progress", "2024-11-25T14:00:00Z"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog() {
        let records = serde_json::to_value(ProductionRecord::catalog()).unwrap();
        assert_eq!(
            records,
            json!([
                {"id": 1, "product_id": 1, "quantity": 50, "status": "Completed", "timestamp": "2024-11-25T12:00:00Z"},
                {"id": 2, "product_id": 2, "quantity": 30, "status": "In Progress", "timestamp": "2024-11-25T14:00:00Z"}
            ])
        );
    }

    #[test]
    fn test_created_message() {
        assert_eq!(
            ProductionRecord::created_message(),
            "Production record created successfully"
        );
    }

    #[test]
    fn test_timestamp_is_not_parsed() {
        let payload = json!({"product_id": 3, "quantity": 25, "timestamp": "yesterday"});
        let record = ProductionRecord::validate(&payload).unwrap();
        assert_eq!(record.timestamp.as_deref(), Some("yesterday"));
    }
}
