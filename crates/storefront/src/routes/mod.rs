//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (catalog readable)
//!
//! # Catalog API
//! GET  /api/products           - All products
//! GET  /api/products/{id}      - One product (404 if unknown)
//!
//! # Order submission (mock)
//! POST /api/cart               - Acknowledge a { cart, total, timestamp } order
//!
//! # Session cart (JSON)
//! GET  /cart                   - Cart contents with count and total
//! POST /cart/add               - Add one unit of a catalog product
//! POST /cart/update            - Change a line's quantity by a delta
//! POST /cart/remove            - Remove a line
//! POST /cart/clear             - Empty the cart
//! GET  /cart/count             - Item count
//! POST /cart/checkout          - Submit the session cart and clear it
//!
//! # Static files
//! GET  /*                      - Files from the static directory
//! ```

pub mod cart;
pub mod health;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog and order API router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/cart", post(orders::submit))
}

/// Create the session cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/count", get(cart::count))
        .route("/checkout", post(cart::checkout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
        .nest("/api", api_routes())
        .nest("/cart", cart_routes())
}
