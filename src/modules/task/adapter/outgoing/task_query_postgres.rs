// src/modules/task/adapter/outgoing/task_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    FromQueryResult, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::task::adapter::outgoing::sea_orm_entity::tasks::{self, Column, Entity};
use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::domain::progress::StatusCounts;
use crate::modules::task::application::ports::outgoing::{
    TaskListFilter, TaskListResult, TaskQuery, TaskQueryError, TaskView,
};
use crate::shared::pagination::PageRequest;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct TaskQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskQuery for TaskQueryPostgres {
    async fn list(
        &self,
        filter: TaskListFilter,
        page: PageRequest,
    ) -> Result<TaskListResult, TaskQueryError> {
        let mut condition = Condition::all().add(Column::DeletedAt.is_null());
        if let Some(project_id) = filter.project_id {
            condition = condition.add(Column::ProjectId.eq(project_id));
        }

        let query = Entity::find()
            .filter(condition.clone())
            .order_by_asc(Column::Id);

        let count = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset)
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let stats = count_by_status(&self.db, condition)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(model_to_view)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(TaskListResult {
            items,
            count,
            task_stats: stats.into(),
        })
    }

    async fn get_by_id(&self, task_id: i32) -> Result<TaskView, TaskQueryError> {
        let model = Entity::find_by_id(task_id)
            .filter(Column::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TaskQueryError::NotFound)?;

        model_to_view(model)
    }
}

// ============================================================================
// Status counting (shared with the user and project read sides)
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct StatusTotalRow {
    status: String,
    total: i64,
}

#[derive(Debug, FromQueryResult)]
struct GroupedStatusTotalRow {
    group_id: i32,
    status: String,
    total: i64,
}

/// Per-status counts over live tasks matching `condition`.
pub(crate) async fn count_by_status(
    db: &DatabaseConnection,
    condition: Condition,
) -> Result<StatusCounts, DbErr> {
    let rows = Entity::find()
        .select_only()
        .column(Column::Status)
        .column_as(Expr::col(Column::Id).count(), "total")
        .filter(condition)
        .group_by(Column::Status)
        .into_model::<StatusTotalRow>()
        .all(db)
        .await?;

    let mut counts = StatusCounts::default();
    for row in rows {
        counts.record(parse_status(&row.status)?, row.total);
    }

    Ok(counts)
}

/// Per-status counts of live tasks keyed by `group_col` (project_id or assigned_to).
/// Ids with no tasks are absent from the map.
pub(crate) async fn count_by_status_grouped(
    db: &DatabaseConnection,
    group_col: Column,
    ids: Vec<i32>,
) -> Result<HashMap<i32, StatusCounts>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = Entity::find()
        .select_only()
        .column_as(group_col, "group_id")
        .column(Column::Status)
        .column_as(Expr::col(Column::Id).count(), "total")
        .filter(Column::DeletedAt.is_null())
        .filter(group_col.is_in(ids))
        .group_by(group_col)
        .group_by(Column::Status)
        .into_model::<GroupedStatusTotalRow>()
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, StatusCounts> = HashMap::new();
    for row in rows {
        let status = parse_status(&row.status)?;
        grouped
            .entry(row.group_id)
            .or_default()
            .record(status, row.total);
    }

    Ok(grouped)
}

fn parse_status(raw: &str) -> Result<TaskStatus, DbErr> {
    raw.parse::<TaskStatus>().map_err(DbErr::Custom)
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn model_to_view(model: tasks::Model) -> Result<TaskView, TaskQueryError> {
    Ok(TaskView {
        id: model.id,
        project_id: model.project_id,
        name: model.name,
        description: model.description,
        assigned_to: model.assigned_to,
        status: model
            .status
            .parse::<TaskStatus>()
            .map_err(TaskQueryError::DatabaseError)?,
        priority: model
            .priority
            .parse::<TaskPriority>()
            .map_err(TaskQueryError::DatabaseError)?,
        due_date: model.due_date,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    })
}

fn map_db_err(e: DbErr) -> TaskQueryError {
    TaskQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
