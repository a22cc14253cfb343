//! Order domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Resource;

/// A customer order for a product.
///
/// `product_id` and `customer_id` are plain numbers; they are never checked
/// against the product or customer collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    /// Order ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Product ID.
    #[schema(example = 1)]
    pub product_id: i64,
    /// Quantity ordered.
    #[schema(example = 10)]
    pub quantity: i64,
    /// Customer ID.
    #[schema(example = 1)]
    pub customer_id: i64,
    /// Order status. Freeform text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Pending")]
    pub status: Option<String>,
}

impl Resource for Order {
    const LABEL: &'static str = "Order";
    const KEY: &'static str = "order";

    fn catalog() -> Vec<Self> {
        vec![
            Order {
                id: Some(1),
                product_id: 1,
                quantity: 10,
                customer_id: 1,
                status: Some("Completed".to_string()),
            },
            Order {
                id: Some(2),
                product_id: 2,
                quantity: 5,
                customer_id: 2,
                status: Some("Pending".to_string()),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog() {
        let orders = serde_json::to_value(Order::catalog()).unwrap();
        assert_eq!(
            orders,
            json!([
                {"id": 1, "product_id": 1, "quantity": 10, "customer_id": 1, "status": "Completed"},
                {"id": 2, "product_id": 2, "quantity": 5, "customer_id": 2, "status": "Pending"}
            ])
        );
    }

    #[test]
    fn test_validate_requires_quantity() {
        let payload = json!({"product_id": 1, "customer_id": 1, "status": "Pending"});
        assert!(Order::validate(&payload).is_err());
    }

    #[test]
    fn test_validate_status_is_optional() {
        let order = Order::validate(&json!({"product_id": 1, "quantity": 3, "customer_id": 9})).unwrap();
        assert_eq!(order.status, None);
        assert_eq!(order.customer_id, 9);
    }
}
