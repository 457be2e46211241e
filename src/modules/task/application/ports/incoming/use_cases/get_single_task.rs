use async_trait::async_trait;

use crate::modules::task::application::ports::outgoing::TaskView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleTaskError {
    #[error("Task not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleTaskUseCase: Send + Sync {
    async fn execute(&self, task_id: i32) -> Result<TaskView, GetSingleTaskError>;
}
