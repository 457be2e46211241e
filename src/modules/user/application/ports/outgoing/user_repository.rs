// src/modules/user/application/ports/outgoing/user_repository.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::user::application::domain::entities::UserRole;
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateUserData {
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub password_hash: String,
}

/// Every users column is non-nullable, so `Null` behaves like `Unset`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchUserData {
    pub full_name: PatchField<String>,
    pub email: PatchField<String>,
    pub role: PatchField<UserRole>,
    pub password_hash: PatchField<String>,
}

/// Stored user without the password hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserResult {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError>;

    async fn patch_user(
        &self,
        user_id: i32,
        data: PatchUserData,
    ) -> Result<UserResult, UserRepositoryError>;
}
