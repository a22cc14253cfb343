//! HTTP request handlers.
//!
//! Every collection gets the same pair of handlers: list returns the fixed
//! catalog, create echoes the submitted payload. Nothing is stored.

use axum::{extract::State, http::StatusCode, http::Uri, Json};
use serde_json::Value;

use crate::api::types::*;
use crate::domain::{Customer, Order, Product, ProductionRecord, Resource};
use crate::error::{FactoryError, FactoryResult};
use crate::AppState;

fn list<R: Resource>() -> Json<Vec<R>> {
    let records = R::catalog();
    tracing::debug!(resource = R::KEY, count = records.len(), "Listing records");
    Json(records)
}

fn create<E>(state: &AppState, payload: Value) -> FactoryResult<(StatusCode, Json<E>)>
where
    E: Envelope,
{
    if state.config.api.strict_validation {
        E::Record::validate(&payload)?;
    }

    tracing::info!(
        resource = E::Record::KEY,
        strict = state.config.api.strict_validation,
        "Payload accepted"
    );

    Ok((StatusCode::CREATED, Json(E::for_payload(payload))))
}

// ==================== Products ====================

/// List all products.
///
/// GET /products/
#[utoipa::path(
    get,
    path = "/products/",
    responses(
        (status = 200, description = "Successful response", body = [Product],
            example = json!([
                {"id": 1, "name": "Widget A", "price": 15.99, "stock": 100},
                {"id": 2, "name": "Gadget B", "price": 9.99, "stock": 200}
            ]))
    ),
    tag = "products"
)]
pub async fn list_products() -> Json<Vec<Product>> {
    list::<Product>()
}

/// Create a new product.
///
/// POST /products/
#[utoipa::path(
    post,
    path = "/products/",
    request_body = Product,
    responses(
        (status = 201, description = "Product successfully created", body = ProductCreated,
            example = json!({
                "message": "Product created successfully",
                "product": {"id": 3, "name": "New Product", "price": 20.99, "stock": 50}
            })),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload rejected by strict validation")
    ),
    tag = "products"
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> FactoryResult<(StatusCode, Json<ProductCreated>)> {
    create(&state, payload)
}

// ==================== Orders ====================

/// List all orders.
///
/// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    responses(
        (status = 200, description = "Successful response", body = [Order],
            example = json!([
                {"id": 1, "product_id": 1, "quantity": 10, "customer_id": 1, "status": "Completed"},
                {"id": 2, "product_id": 2, "quantity": 5, "customer_id": 2, "status": "Pending"}
            ]))
    ),
    tag = "orders"
)]
pub async fn list_orders() -> Json<Vec<Order>> {
    list::<Order>()
}

/// Create a new order.
///
/// POST /orders/
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = Order,
    responses(
        (status = 201, description = "Order successfully created", body = OrderCreated,
            example = json!({
                "message": "Order created successfully",
                "order": {"id": 3, "product_id": 1, "quantity": 20, "customer_id": 3, "status": "Pending"}
            })),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload rejected by strict validation")
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> FactoryResult<(StatusCode, Json<OrderCreated>)> {
    create(&state, payload)
}

// ==================== Customers ====================

/// List all customers.
///
/// GET /customers/
#[utoipa::path(
    get,
    path = "/customers/",
    responses(
        (status = 200, description = "Successful response", body = [Customer],
            example = json!([
                {"id": 1, "name": "Alice Green", "email": "alice@example.com", "phone": "+1234567890"},
                {"id": 2, "name": "Bob Smith", "email": "bob@example.com", "phone": "+9876543210"}
            ]))
    ),
    tag = "customers"
)]
pub async fn list_customers() -> Json<Vec<Customer>> {
    list::<Customer>()
}

/// Create a new customer.
///
/// POST /customers/
#[utoipa::path(
    post,
    path = "/customers/",
    request_body = Customer,
    responses(
        (status = 201, description = "Customer successfully created", body = CustomerCreated,
            example = json!({
                "message": "Customer created successfully",
                "customer": {"id": 3, "name": "Jane Doe", "email": "jane@example.com", "phone": "+1122334455"}
            })),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload rejected by strict validation")
    ),
    tag = "customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> FactoryResult<(StatusCode, Json<CustomerCreated>)> {
    create(&state, payload)
}

// ==================== Production ====================

/// List all production records.
///
/// GET /production/
#[utoipa::path(
    get,
    path = "/production/",
    responses(
        (status = 200, description = "Successful response", body = [ProductionRecord],
            example = json!([
                {"id": 1, "product_id": 1, "quantity": 50, "status": "Completed", "timestamp": "2024-11-25T12:00:00Z"},
                {"id": 2, "product_id": 2, "quantity": 30, "status": "In Progress", "timestamp": "2024-11-25T14:00:00Z"}
            ]))
    ),
    tag = "production"
)]
pub async fn list_production() -> Json<Vec<ProductionRecord>> {
    list::<ProductionRecord>()
}

/// Create a new production record.
///
/// POST /production/
#[utoipa::path(
    post,
    path = "/production/",
    request_body = ProductionRecord,
    responses(
        (status = 201, description = "Production record successfully created", body = ProductionCreated,
            example = json!({
                "message": "Production record created successfully",
                "production": {"id": 3, "product_id": 3, "quantity": 25, "status": "In Progress", "timestamp": "2024-11-26T10:00:00Z"}
            })),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Payload rejected by strict validation")
    ),
    tag = "production"
)]
pub async fn create_production(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> FactoryResult<(StatusCode, Json<ProductionCreated>)> {
    create(&state, payload)
}

// ==================== Health ====================

/// Health check endpoint.
///
/// GET /health
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Fallback for paths no collection is registered under.
pub async fn not_found(uri: Uri) -> FactoryError {
    tracing::debug!(path = %uri.path(), "No route matched");
    FactoryError::NotFound(uri.path().to_string())
}
