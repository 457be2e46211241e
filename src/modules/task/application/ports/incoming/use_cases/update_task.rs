use async_trait::async_trait;

use crate::modules::task::application::ports::outgoing::TaskView;
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Enum and date fields arrive as strings and are validated only when present.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskCommand {
    pub project_id: PatchField<i32>,
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub assigned_to: PatchField<i32>,
    pub status: PatchField<String>,
    pub priority: PatchField<String>,
    pub due_date: PatchField<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateTaskError {
    #[error("Task not found")]
    NotFound,

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("{0}")]
    InvalidStatus(String),

    #[error("{0}")]
    InvalidPriority(String),

    #[error("due_date must use the YYYY-MM-DD format (got '{0}')")]
    InvalidDueDate(String),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateTaskUseCase: Send + Sync {
    async fn execute(
        &self,
        task_id: i32,
        command: UpdateTaskCommand,
    ) -> Result<TaskView, UpdateTaskError>;
}
