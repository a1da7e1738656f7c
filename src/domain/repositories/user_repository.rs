use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::user::value_objects::Email;
use crate::domain::user::User;

/// Repository trait for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user
    async fn add(&self, user: User) -> Result<User, RepositoryError>;

    /// Find a user by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError>;

    /// Find a user by email address (exact match)
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError>;

    /// Return all users, deactivated ones included
    async fn find_all(&self) -> Result<Vec<User>, RepositoryError>;

    /// Replace the stored record under `id`
    async fn update(&self, id: Uuid, user: User) -> Result<User, RepositoryError>;

    /// Mark a user inactive, keeping the record in storage
    async fn deactivate(&self, id: Uuid) -> Result<(), RepositoryError>;
}
