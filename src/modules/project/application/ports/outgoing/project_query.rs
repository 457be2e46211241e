// src/modules/project/application/ports/outgoing/project_query.rs

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::shared::pagination::{ListResult, PageRequest};

//
// ──────────────────────────────────────────────────────────
// Query DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectListItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub task_stats: TaskStatsView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectDetailView {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub owner_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub task_stats: TaskStatsView,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectListFilter {
    pub owner_id: Option<i32>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectQueryError {
    #[error("Project not found")]
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
pub trait ProjectQuery: Send + Sync {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<ListResult<ProjectListItem>, ProjectQueryError>;

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectDetailView, ProjectQueryError>;
}
