use std::sync::Arc;

use uuid::Uuid;

use super::ServiceError;
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::UserRepository;
use crate::domain::user::{Address, NewUser, User, UserPatch};

/// Service enforcing account business rules over a [`UserRepository`]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new UserService
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    /// Creates a user, rejecting duplicate email addresses
    ///
    /// Uniqueness is a case-sensitive exact match on the address.
    pub async fn create_user(&self, new: NewUser) -> Result<User, ServiceError> {
        // The check and the insert take the store lock separately; two
        // concurrent creates of the same email can both pass the check.
        // A persistent backend must enforce uniqueness in storage as well.
        if self.repo.find_by_email(&new.email).await?.is_some() {
            return Err(ServiceError::EmailTaken);
        }
        let user = User::create(new);
        tracing::debug!(user_id = %user.id, "creating user");
        Ok(self.repo.add(user).await?)
    }

    /// Returns all users, deactivated ones included
    pub async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.repo.find_all().await?)
    }

    /// Fetches a single user
    pub async fn get_user(&self, id: Uuid) -> Result<User, ServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::UserNotFound(id))
    }

    /// Applies a partial update; email is immutable and not part of the patch
    pub async fn update_user(&self, id: Uuid, patch: UserPatch) -> Result<User, ServiceError> {
        let current = self.get_user(id).await?;
        self.repo
            .update(id, current.merged(&patch))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::UserNotFound(id),
                other => ServiceError::Storage(other),
            })
    }

    /// Appends one address to the user's list
    pub async fn add_address(&self, id: Uuid, address: Address) -> Result<User, ServiceError> {
        let current = self.get_user(id).await?;
        self.repo
            .update(id, current.with_address(address))
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ServiceError::UserNotFound(id),
                other => ServiceError::Storage(other),
            })
    }

    /// Soft-deletes a user; idempotent once the user exists
    pub async fn deactivate(&self, id: Uuid) -> Result<(), ServiceError> {
        tracing::debug!(user_id = %id, "deactivating user");
        self.repo.deactivate(id).await.map_err(|e| match e {
            RepositoryError::NotFound => ServiceError::UserNotFound(id),
            other => ServiceError::Storage(other),
        })
    }
}
