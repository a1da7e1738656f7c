// Service layer: business rules between the API adapters and the repositories

pub mod product_service;
pub mod user_service;

pub use product_service::ProductService;
pub use user_service::UserService;

use thiserror::Error;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

/// Business-rule failures surfaced by the service layer
///
/// The API layer maps each variant to an HTTP status code; services never
/// see transport concerns.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("product not found: {0}")]
    ProductNotFound(Uuid),

    #[error("user not found: {0}")]
    UserNotFound(Uuid),

    #[error("email already registered")]
    EmailTaken,

    #[error("{0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Storage(#[from] RepositoryError),
}
