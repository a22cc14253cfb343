//! Customer domain types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Resource;

/// A customer of the factory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Customer {
    /// Customer ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Full name of the customer.
    #[schema(example = "Alice Green")]
    pub name: String,
    /// Email address.
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// Phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "+1234567890")]
    pub phone: Option<String>,
}

impl Customer {
    fn new(id: i64, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: Some(id),
            name: name.to_string(),
            email: email.to_string(),
            phone: Some(phone.to_string()),
        }
    }
}

impl Resource for Customer {
    const LABEL: &'static str = "Customer";
    const KEY: &'static str = "customer";

    fn catalog() -> Vec<Self> {
        vec![
            Customer::new(1, "Alice Green", "alice@example.com", "+1234567890"),
            Customer::new(2, "Bob Smith", "bob@example.com", "+9876543210"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_catalog() {
        let customers = serde_json::to_value(Customer::catalog()).unwrap();
        assert_eq!(
            customers,
            json!([
                {"id": 1, "name": "Alice Green", "email": "alice@example.com", "phone": "+1234567890"},
                {"id": 2, "name": "Bob Smith", "email": "bob@example.com", "phone": "+9876543210"}
            ])
        );
    }

    #[test]
    fn test_validate_requires_email() {
        assert!(Customer::validate(&json!({"name": "Jane Doe"})).is_err());
        assert!(Customer::validate(&json!({"name": "Jane Doe", "email": "jane@example.com"})).is_ok());
    }
}
