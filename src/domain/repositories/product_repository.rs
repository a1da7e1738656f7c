use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::product::Product;

/// Repository trait for the product catalog
///
/// Defines the storage contract behind the product service. The in-memory
/// implementation can be swapped for a persistent one without touching
/// service logic.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Store a new product
    async fn add(&self, product: Product) -> Result<Product, RepositoryError>;

    /// Find a product by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError>;

    /// Return all products, in no guaranteed order
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;

    /// Filter products by text query and/or category
    ///
    /// `query` is a case-insensitive substring match against name or
    /// description; `category` is a case-insensitive exact match. Both
    /// filters are ANDed when present; an absent filter passes everything.
    async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError>;

    /// Replace the stored record under `id`
    async fn update(&self, id: Uuid, product: Product) -> Result<Product, RepositoryError>;

    /// Delete a product outright
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
