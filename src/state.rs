use std::sync::Arc;

use crate::infrastructure::repositories::{InMemoryProductRepository, InMemoryUserRepository};
use crate::services::{ProductService, UserService};

/// Shared application state handed to the router
///
/// Built once at startup and cloned into each handler. Services hold their
/// repositories behind trait objects, so a persistent backend can be wired
/// in here without touching the handlers.
#[derive(Clone)]
pub struct AppState {
    pub products: Arc<ProductService>,
    pub users: Arc<UserService>,
}

impl AppState {
    /// Wires the services to fresh in-memory stores
    pub fn in_memory() -> Self {
        Self {
            products: Arc::new(ProductService::new(Arc::new(
                InMemoryProductRepository::new(),
            ))),
            users: Arc::new(UserService::new(Arc::new(InMemoryUserRepository::new()))),
        }
    }
}
