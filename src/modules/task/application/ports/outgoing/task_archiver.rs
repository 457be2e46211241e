// src/modules/task/application/ports/outgoing/task_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskArchiverError {
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TaskArchiver: Send + Sync {
    /// Sets `deleted_at`; only rows that are still live count.
    async fn soft_delete(&self, task_id: i32) -> Result<(), TaskArchiverError>;
}
