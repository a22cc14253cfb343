//! API request and response types.
//!
//! Create envelopes hold the submitted payload as raw JSON so it can be
//! echoed back exactly; the schema attributes document the intended shape.

use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::domain::Resource;

// ==================== Create envelopes ====================

/// Response after submitting a product.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductCreated {
    /// Confirmation message.
    #[schema(example = "Product created successfully")]
    pub message: String,
    /// The submitted product, as received.
    #[schema(value_type = crate::domain::Product)]
    pub product: Value,
}

/// Response after submitting an order.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreated {
    /// Confirmation message.
    #[schema(example = "Order created successfully")]
    pub message: String,
    /// The submitted order, as received.
    #[schema(value_type = crate::domain::Order)]
    pub order: Value,
}

/// Response after submitting a customer.
#[derive(Debug, Serialize, ToSchema)]
pub struct CustomerCreated {
    /// Confirmation message.
    #[schema(example = "Customer created successfully")]
    pub message: String,
    /// The submitted customer, as received.
    #[schema(value_type = crate::domain::Customer)]
    pub customer: Value,
}

/// Response after submitting a production record.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProductionCreated {
    /// Confirmation message.
    #[schema(example = "Production record created successfully")]
    pub message: String,
    /// The submitted production record, as received.
    #[schema(value_type = crate::domain::ProductionRecord)]
    pub production: Value,
}

/// Builds the envelope returned by a create endpoint.
pub trait Envelope: Sized {
    type Record: Resource;

    fn wrap(message: String, payload: Value) -> Self;

    fn for_payload(payload: Value) -> Self {
        Self::wrap(Self::Record::created_message(), payload)
    }
}

impl Envelope for ProductCreated {
    type Record = crate::domain::Product;

    fn wrap(message: String, product: Value) -> Self {
        Self { message, product }
    }
}

impl Envelope for OrderCreated {
    type Record = crate::domain::Order;

    fn wrap(message: String, order: Value) -> Self {
        Self { message, order }
    }
}

impl Envelope for CustomerCreated {
    type Record = crate::domain::Customer;

    fn wrap(message: String, customer: Value) -> Self {
        Self { message, customer }
    }
}

impl Envelope for ProductionCreated {
    type Record = crate::domain::ProductionRecord;

    fn wrap(message: String, production: Value) -> Self {
        Self {
            message,
            production,
        }
    }
}

// ==================== Health ====================

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Timestamp.
    pub timestamp: String,
}
