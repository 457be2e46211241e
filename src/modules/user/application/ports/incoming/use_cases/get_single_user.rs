use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::UserDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleUserError {
    #[error("User not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleUserUseCase: Send + Sync {
    async fn execute(&self, user_id: i32) -> Result<UserDetailView, GetSingleUserError>;
}
