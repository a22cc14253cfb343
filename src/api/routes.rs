//! Route definitions for the API.

use std::sync::Arc;

use axum::{
    response::Redirect,
    routing::{any, get, MethodRouter},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::config::Config;
use crate::AppState;

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::list_products,
        handlers::create_product,
        handlers::list_orders,
        handlers::create_order,
        handlers::list_customers,
        handlers::create_customer,
        handlers::list_production,
        handlers::create_production,
        handlers::health_check,
    ),
    components(schemas(
        crate::api::types::ProductCreated,
        crate::api::types::OrderCreated,
        crate::api::types::CustomerCreated,
        crate::api::types::ProductionCreated,
        crate::api::types::HealthResponse,
        crate::domain::Product,
        crate::domain::Order,
        crate::domain::Customer,
        crate::domain::ProductionRecord,
    )),
    tags(
        (name = "products", description = "Product operations"),
        (name = "orders", description = "Order operations"),
        (name = "customers", description = "Customer operations"),
        (name = "production", description = "Production operations"),
        (name = "health", description = "Health and status endpoints")
    ),
    info(
        title = "Factory Management System API",
        version = "1.0",
        description = "API for managing factory operations.",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Permanent (308) redirect to the slash-terminated collection path.
fn redirect_to<S>(target: &'static str) -> MethodRouter<S>
where
    S: Clone + Send + Sync + 'static,
{
    any(move || async move { Redirect::permanent(target) })
}

/// Build the API router.
///
/// Each collection is registered once. Requests without the trailing slash
/// are redirected with 308 so the method and body survive. Unmatched paths
/// fall through to a JSON 404.
pub fn build_router(config: Arc<Config>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let docs = SwaggerUi::new(config.docs.swagger_path.clone())
        .url(config.docs.openapi_path.clone(), ApiDoc::openapi());

    let state = AppState { config };

    Router::new()
        .route(
            "/products/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/orders/",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route(
            "/customers/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/production/",
            get(handlers::list_production).post(handlers::create_production),
        )
        .route("/products", redirect_to("/products/"))
        .route("/orders", redirect_to("/orders/"))
        .route("/customers", redirect_to("/customers/"))
        .route("/production", redirect_to("/production/"))
        // Health
        .route("/health", get(handlers::health_check))
        .with_state(state)
        // OpenAPI docs
        .merge(docs)
        .fallback(handlers::not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
