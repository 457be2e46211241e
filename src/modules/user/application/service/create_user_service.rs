// src/modules/user/application/service/create_user_service.rs

use async_trait::async_trait;

use crate::modules::user::application::domain::entities::{normalize_email, UserRole};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    CreateUserData, PasswordHasher, UserRepository, UserRepositoryError, UserResult,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    user_repository: R,
    password_hasher: H,
}

impl<R, H> CreateUserService<R, H>
where
    R: UserRepository,
    H: PasswordHasher,
{
    pub fn new(user_repository: R, password_hasher: H) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }
}

#[async_trait]
impl<R, H> CreateUserUseCase for CreateUserService<R, H>
where
    R: UserRepository + Send + Sync,
    H: PasswordHasher + Send + Sync,
{
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        // Presence first, in the order clients see it reported
        let email = required(command.email, "email")?;
        let role = required(command.role, "role")?;
        let full_name = required(command.full_name, "full_name")?;
        let password = required(command.password, "password")?;

        let role = role
            .trim()
            .parse::<UserRole>()
            .map_err(CreateUserError::InvalidRole)?;
        let email = normalize_email(&email).map_err(CreateUserError::InvalidEmail)?;

        let password_hash = self
            .password_hasher
            .hash_password(&password)
            .await
            .map_err(|e| CreateUserError::HashFailed(e.to_string()))?;

        self.user_repository
            .create_user(CreateUserData {
                full_name: full_name.trim().to_string(),
                email,
                role,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::EmailAlreadyExists => CreateUserError::EmailAlreadyExists,

                UserRepositoryError::DatabaseError(msg) => CreateUserError::RepositoryError(msg),

                UserRepositoryError::NotFound => CreateUserError::RepositoryError(
                    "unexpected not found while creating user".to_string(),
                ),
            })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, CreateUserError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CreateUserError::MissingField(field)),
    }
}
