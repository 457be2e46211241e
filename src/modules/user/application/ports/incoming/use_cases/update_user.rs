use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::UserResult;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub full_name: PatchField<String>,
    pub email: PatchField<String>,
    pub role: PatchField<String>,
    /// Plain text; hashed before it reaches the repository.
    pub password: PatchField<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    NotFound,

    #[error("full_name must not be empty")]
    EmptyFullName,

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

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: i32,
        command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError>;
}
