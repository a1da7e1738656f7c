// API layer module (adapters for controllers)
// Follows Hexagonal Architecture - API is an adapter

pub mod errors;
pub mod handlers;

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;
use handlers::{products, users};

/// Builds the application router over the shared state
///
/// Kept separate from `main` so black-box tests can drive the router
/// directly without binding a socket.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Product routes
        .route("/products/", post(products::create_product))
        .route("/products/", get(products::list_products))
        .route("/products/:id", get(products::get_product))
        .route("/products/:id", put(products::update_product))
        .route("/products/:id", delete(products::delete_product))
        .route("/products/:id/stock/:amount", post(products::add_stock))
        // User routes
        .route("/users/", post(users::create_user))
        .route("/users/", get(users::list_users))
        .route("/users/:id", get(users::get_user))
        .route("/users/:id", put(users::update_user))
        .route("/users/:id", delete(users::deactivate_user))
        .route("/users/:id/addresses", post(users::add_address))
        // Shared state
        .with_state(state)
}
