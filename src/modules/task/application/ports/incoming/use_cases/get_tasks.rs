use async_trait::async_trait;

use crate::modules::task::application::ports::outgoing::{
    TaskListFilter, TaskListResult, TaskQueryError,
};
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetTasksError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<TaskQueryError> for GetTasksError {
    fn from(err: TaskQueryError) -> Self {
        match err {
            TaskQueryError::DatabaseError(msg) => GetTasksError::QueryFailed(msg),

            // Listing never looks up a single row
            TaskQueryError::NotFound => GetTasksError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait GetTasksUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: TaskListFilter,
        page: PageRequest,
    ) -> Result<TaskListResult, GetTasksError>;
}
