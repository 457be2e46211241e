// src/modules/project/application/ports/outgoing/project_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectArchiverError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectArchiver: Send + Sync {
    /// Sets `deleted_at`; only rows that are still live count.
    async fn soft_delete(&self, project_id: i32) -> Result<(), ProjectArchiverError>;
}
