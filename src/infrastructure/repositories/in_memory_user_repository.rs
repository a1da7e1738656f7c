use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::repositories::UserRepository;
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// In-memory implementation of [`UserRepository`]
#[derive(Default)]
pub struct InMemoryUserRepository {
    db: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn add(&self, user: User) -> Result<User, RepositoryError> {
        let mut db = self.db.write().await;
        db.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        Ok(self.db.read().await.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        let db = self.db.read().await;
        Ok(db.values().find(|u| &u.email == email).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, RepositoryError> {
        Ok(self.db.read().await.values().cloned().collect())
    }

    async fn update(&self, id: Uuid, user: User) -> Result<User, RepositoryError> {
        let mut db = self.db.write().await;
        if !db.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        db.insert(id, user.clone());
        Ok(user)
    }

    async fn deactivate(&self, id: Uuid) -> Result<(), RepositoryError> {
        let mut db = self.db.write().await;
        match db.get_mut(&id) {
            Some(user) => {
                user.is_active = false;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }
}
