// src/modules/task/application/ports/outgoing/task_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::shared::pagination::PageRequest;

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskView {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub assigned_to: Option<i32>,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[schema(example = "2025-03-31")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskListFilter {
    pub project_id: Option<i32>,
}

/// Page of tasks; `count` and `task_stats` cover the whole filtered set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TaskListResult {
    pub items: Vec<TaskView>,
    pub count: u64,
    pub task_stats: TaskStatsView,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum TaskQueryError {
    #[error("Task not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (Read-side)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait TaskQuery: Send + Sync {
    async fn list(
        &self,
        filter: TaskListFilter,
        page: PageRequest,
    ) -> Result<TaskListResult, TaskQueryError>;

    async fn get_by_id(&self, task_id: i32) -> Result<TaskView, TaskQueryError>;
}
