use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::UserResult;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Default)]
pub struct CreateUserCommand {
    pub email: Option<String>,
    pub role: Option<String>,
    pub full_name: Option<String>,
    pub password: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateUserError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("{0}")]
    InvalidRole(String),

    #[error("{0}")]
    InvalidEmail(String),

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Password hashing failed: {0}")]
    HashFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateUserUseCase: Send + Sync {
    async fn execute(&self, command: CreateUserCommand) -> Result<UserResult, CreateUserError>;
}
