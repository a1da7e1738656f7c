use std::sync::Arc;

use uuid::Uuid;

use super::ServiceError;
use crate::domain::errors::RepositoryError;
use crate::domain::product::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::ProductRepository;

/// Service enforcing catalog business rules over a [`ProductRepository`]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

impl ProductService {
    /// Creates a new ProductService
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Creates a product with a fresh identifier
    pub async fn create(&self, new: NewProduct) -> Result<Product, ServiceError> {
        let product = Product::create(new);
        tracing::debug!(product_id = %product.id, "creating product");
        Ok(self.repo.add(product).await?)
    }

    /// Returns the full catalog
    pub async fn list(&self) -> Result<Vec<Product>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Filters the catalog by text query and/or category
    pub async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, ServiceError> {
        Ok(self.repo.search(query, category).await?)
    }

    /// Fetches a single product
    pub async fn get(&self, id: Uuid) -> Result<Product, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::ProductNotFound(id))
    }

    /// Applies a partial update; absent fields keep their prior value
    pub async fn update(&self, id: Uuid, patch: ProductPatch) -> Result<Product, ServiceError> {
        let current = self.get(id).await?;
        self.repo
            .update(id, current.merged(&patch))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::ProductNotFound(id),
                other => ServiceError::Storage(other),
            })
    }

    /// Increments stock by a strictly positive amount
    pub async fn add_stock(&self, id: Uuid, amount: i64) -> Result<Product, ServiceError> {
        if amount <= 0 {
            return Err(ServiceError::InvalidArgument(
                "stock amount must be positive".to_string(),
            ));
        }
        let mut product = self.get(id).await?;
        product.stock = product.stock.checked_add(amount).ok_or_else(|| {
            ServiceError::InvalidArgument("stock amount too large".to_string())
        })?;
        self.repo.update(id, product).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::ProductNotFound(id),
            other => ServiceError::Storage(other),
        })
    }

    /// Deletes a product outright
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        tracing::debug!(product_id = %id, "removing product");
        self.repo.delete(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::ProductNotFound(id),
            other => ServiceError::Storage(other),
        })
    }
}
