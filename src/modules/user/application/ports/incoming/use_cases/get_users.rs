use async_trait::async_trait;

use crate::modules::user::application::ports::outgoing::{UserListItem, UserQueryError};
use crate::shared::pagination::{ListResult, PageRequest};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUsersError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<UserQueryError> for GetUsersError {
    fn from(err: UserQueryError) -> Self {
        match err {
            UserQueryError::DatabaseError(msg) => GetUsersError::QueryFailed(msg),
            UserQueryError::NotFound => GetUsersError::QueryFailed("Not found".to_string()),
        }
    }
}

#[async_trait]
pub trait GetUsersUseCase: Send + Sync {
    async fn execute(&self, page: PageRequest) -> Result<ListResult<UserListItem>, GetUsersError>;
}
