use async_trait::async_trait;

use crate::modules::task::application::ports::outgoing::TaskView;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Raw create payload; presence and format are checked by the use case.
#[derive(Debug, Clone, Default)]
pub struct CreateTaskCommand {
    pub project_id: Option<i32>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub assigned_to: Option<i32>,
    pub status: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<String>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTaskError {
    #[error("{0} is required")]
    MissingField(&'static str),

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
pub trait CreateTaskUseCase: Send + Sync {
    async fn execute(&self, command: CreateTaskCommand) -> Result<TaskView, CreateTaskError>;
}
