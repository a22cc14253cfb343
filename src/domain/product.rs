//! Product domain types.
//!
//! A product is something the factory makes and sells.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Resource;

/// A product in the factory catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Product ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Name of the product.
    #[schema(example = "Widget A")]
    pub name: String,
    /// Price of the product.
    #[schema(example = 15.99)]
    pub price: f64,
    /// Stock quantity.
    #[schema(example = 100)]
    pub stock: i64,
}

impl Product {
    fn new(id: i64, name: &str, price: f64, stock: i64) -> Self {
        Self {
            id: Some(id),
            name: name.to_string(),
            price,
            stock,
        }
    }
}

impl Resource for Product {
    const LABEL: &'static str = "Product";
    const KEY: &'static str = "product";

    fn catalog() -> Vec<Self> {
        vec![
            Product::new(1, "Widget A", 15.99, 100),
            Product::new(2, "Gadget B", 9.99, 200),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FactoryError;
    use serde_json::json;

    #[test]
    fn test_catalog_is_fixed() {
        let products = Product::catalog();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0].id, Some(1));
        assert_eq!(products[0].name, "Widget A");
        assert_eq!(products[0].price, 15.99);
        assert_eq!(products[0].stock, 100);
        assert_eq!(products[1].id, Some(2));
        assert_eq!(products[1].name, "Gadget B");
        assert_eq!(products[1].price, 9.99);
        assert_eq!(products[1].stock, 200);
        assert_eq!(products, Product::catalog());
    }

    #[test]
    fn test_created_message() {
        assert_eq!(Product::created_message(), "Product created successfully");
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(&Product::catalog()[0]).unwrap();
        assert_eq!(
            value,
            json!({"id": 1, "name": "Widget A", "price": 15.99, "stock": 100})
        );
    }

    #[test]
    fn test_validate_accepts_payload_without_id() {
        let product = Product::validate(&json!({"name": "X", "price": 1, "stock": 5})).unwrap();
        assert_eq!(product.id, None);
        assert_eq!(product.price, 1.0);
    }

    #[test]
    fn test_validate_ignores_unknown_fields() {
        let payload = json!({"name": "X", "price": 1.0, "stock": 5, "color": "red"});
        assert!(Product::validate(&payload).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_required_field() {
        let err = Product::validate(&json!({"name": "X", "price": 1.0})).unwrap_err();
        match err {
            FactoryError::Validation(msg) => assert!(msg.contains("stock")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_wrong_type() {
        let payload = json!({"name": "X", "price": "cheap", "stock": 5});
        assert!(matches!(
            Product::validate(&payload),
            Err(FactoryError::Validation(_))
        ));
    }
}
