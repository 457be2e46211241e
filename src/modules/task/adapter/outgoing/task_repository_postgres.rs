// src/modules/task/adapter/outgoing/task_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::task::adapter::outgoing::sea_orm_entity::tasks::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::task::adapter::outgoing::task_query_postgres::model_to_view;
use crate::modules::task::application::ports::outgoing::{
    CreateTaskData, PatchTaskData, TaskQueryError, TaskRepository, TaskRepositoryError, TaskView,
};
use crate::shared::patch_field::PatchField;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct TaskRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskRepository for TaskRepositoryPostgres {
    async fn create_task(&self, data: CreateTaskData) -> Result<TaskView, TaskRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            project_id: Set(data.project_id),
            name: Set(data.name),
            description: Set(data.description),
            assigned_to: Set(data.assigned_to),
            status: Set(data.status.as_str().to_string()),
            priority: Set(data.priority.as_str().to_string()),
            due_date: Set(data.due_date),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let result = model
            .insert(&*self.db)
            .await
            .map_err(map_reference_error)?;

        to_result(result)
    }

    async fn patch_task(
        &self,
        task_id: i32,
        data: PatchTaskData,
    ) -> Result<TaskView, TaskRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        // Non-nullable columns: null keeps the stored value
        if let PatchField::Value(project_id) = data.project_id {
            model.project_id = Set(project_id);
        }

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(status) = data.status {
            model.status = Set(status.as_str().to_string());
        }

        if let PatchField::Value(priority) = data.priority {
            model.priority = Set(priority.as_str().to_string());
        }

        match data.assigned_to {
            PatchField::Unset => {}
            PatchField::Null => model.assigned_to = Set(None),
            PatchField::Value(user_id) => model.assigned_to = Set(Some(user_id)),
        }

        match data.due_date {
            PatchField::Unset => {}
            PatchField::Null => model.due_date = Set(None),
            PatchField::Value(date) => model.due_date = Set(Some(date)),
        }

        let has_changes = model.project_id.is_set()
            || model.name.is_set()
            || model.description.is_set()
            || model.status.is_set()
            || model.priority.is_set()
            || model.assigned_to.is_set()
            || model.due_date.is_set();

        if !has_changes {
            let result = Entity::find_by_id(task_id)
                .filter(Column::DeletedAt.is_null())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(TaskRepositoryError::NotFound)?;

            return to_result(result);
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(task_id))
            .filter(Column::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_reference_error)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(TaskRepositoryError::NotFound)?;

        to_result(result)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn to_result(model: tasks::Model) -> Result<TaskView, TaskRepositoryError> {
    model_to_view(model).map_err(|e| match e {
        TaskQueryError::NotFound => TaskRepositoryError::NotFound,
        TaskQueryError::DatabaseError(msg) => TaskRepositoryError::DatabaseError(msg),
    })
}

fn map_reference_error(e: DbErr) -> TaskRepositoryError {
    let msg = e.to_string();
    let lower = msg.to_lowercase();

    if lower.contains("foreign key") || lower.contains("23503") {
        TaskRepositoryError::InvalidReference(msg)
    } else {
        TaskRepositoryError::DatabaseError(msg)
    }
}

fn map_db_err(e: DbErr) -> TaskRepositoryError {
    TaskRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
