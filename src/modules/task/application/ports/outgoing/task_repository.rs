// src/modules/task/application/ports/outgoing/task_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::ports::outgoing::task_query::TaskView;
use crate::shared::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateTaskData {
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub assigned_to: Option<i32>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
}

/// Patch semantics:
/// - project_id/name/description/status/priority: Value => replace, Unset/Null => keep
/// - assigned_to/due_date: Unset => keep, Null => clear, Value => set
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatchTaskData {
    pub project_id: PatchField<i32>,
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub assigned_to: PatchField<i32>,
    pub status: PatchField<TaskStatus>,
    pub priority: PatchField<TaskPriority>,
    pub due_date: PatchField<NaiveDate>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskRepositoryError {
    /// Missing or soft-deleted.
    #[error("Task not found")]
    NotFound,

    /// project_id or assigned_to points at a row that does not exist.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Command-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TaskRepository: Send + Sync {
    async fn create_task(&self, data: CreateTaskData) -> Result<TaskView, TaskRepositoryError>;

    async fn patch_task(
        &self,
        task_id: i32,
        data: PatchTaskData,
    ) -> Result<TaskView, TaskRepositoryError>;
}
