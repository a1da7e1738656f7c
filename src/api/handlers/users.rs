use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validate_length;
use crate::api::errors::ApiError;
use crate::domain::user::value_objects::Email;
use crate::domain::user::{Address, NewUser, User, UserPatch};
use crate::state::AppState;

/// Request body for creating a user
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    fn validate(&self) -> Result<(), String> {
        validate_length("name", &self.name, 2, 60)?;
        validate_length("password", &self.password, 6, 64)?;
        Ok(())
    }
}

/// User representation returned by the API
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub addresses: Vec<Address>,
    pub is_active: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.to_string(),
            addresses: user.addresses.clone(),
            is_active: user.is_active,
        }
    }
}

fn validate_patch(patch: &UserPatch) -> Result<(), String> {
    if let Some(name) = &patch.name {
        validate_length("name", name, 2, 60)?;
    }
    Ok(())
}

/// Register a new user
///
/// POST /users/
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    req.validate().map_err(ApiError::unprocessable_entity)?;
    let email = Email::new(&req.email).map_err(ApiError::unprocessable_entity)?;

    // The password is validated and then dropped: credential storage and
    // hashing are out of scope for this demo API.
    let user = state
        .users
        .create_user(NewUser {
            name: req.name,
            email,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// List all users, deactivated ones included
///
/// GET /users/
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Get a user by ID
///
/// GET /users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.get_user(id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Partially update a user (name and/or addresses)
///
/// PUT /users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<UserPatch>,
) -> Result<Json<UserResponse>, ApiError> {
    validate_patch(&patch).map_err(ApiError::unprocessable_entity)?;

    let user = state.users.update_user(id, patch).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Append an address to a user
///
/// POST /users/:id/addresses
pub async fn add_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(address): Json<Address>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.users.add_address(id, address).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Soft-deactivate a user
///
/// DELETE /users/:id
pub async fn deactivate_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.users.deactivate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
