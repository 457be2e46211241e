// src/modules/user/application/ports/outgoing/user_query.rs

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::modules::user::application::domain::entities::UserRole;
use crate::shared::pagination::{ListResult, PageRequest};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserListItem {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub task_stats: TaskStatsView,
}

/// Task as listed inside a user detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserTaskItem {
    pub id: i32,
    pub project_id: i32,
    pub name: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDetailView {
    pub id: i32,
    pub full_name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub task_stats: TaskStatsView,
    /// Newest first.
    pub tasks: Vec<UserTaskItem>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("User not found")]
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
pub trait UserQuery: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<ListResult<UserListItem>, UserQueryError>;

    async fn get_detail(&self, user_id: i32) -> Result<UserDetailView, UserQueryError>;
}
