// src/modules/user/application/ports/outgoing/user_archiver.rs

use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserArchiverError {
    #[error("User not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserArchiver: Send + Sync {
    async fn soft_delete(&self, user_id: i32) -> Result<(), UserArchiverError>;
}
