use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::product::Product;
use crate::domain::repositories::ProductRepository;

/// In-memory implementation of [`ProductRepository`]
///
/// The backing map is guarded by an `RwLock` since axum serves requests
/// concurrently. Reads return records in no guaranteed order.
#[derive(Default)]
pub struct InMemoryProductRepository {
    db: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut db = self.db.write().await;
        db.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Product>, RepositoryError> {
        Ok(self.db.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.db.read().await.values().cloned().collect())
    }

    async fn search(
        &self,
        query: Option<&str>,
        category: Option<&str>,
    ) -> Result<Vec<Product>, RepositoryError> {
        let query = query.map(str::to_lowercase);
        let category = category.map(str::to_lowercase);

        let db = self.db.read().await;
        let results = db
            .values()
            .filter(|p| {
                let matches_query = query.as_deref().map_or(true, |q| {
                    p.name.to_lowercase().contains(q)
                        || p.description
                            .as_deref()
                            .is_some_and(|d| d.to_lowercase().contains(q))
                });
                let matches_category = category
                    .as_deref()
                    .map_or(true, |c| p.category.to_lowercase() == c);
                matches_query && matches_category
            })
            .cloned()
            .collect();

        Ok(results)
    }

    async fn update(&self, id: Uuid, product: Product) -> Result<Product, RepositoryError> {
        let mut db = self.db.write().await;
        if !db.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        db.insert(id, product.clone());
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        db.remove(&id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}
