use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTaskError {
    #[error("Task not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTaskUseCase: Send + Sync {
    async fn execute(&self, task_id: i32) -> Result<(), DeleteTaskError>;
}
