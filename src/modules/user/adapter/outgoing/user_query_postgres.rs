// src/modules/user/adapter/outgoing/user_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::task::adapter::outgoing::sea_orm_entity::tasks;
use crate::modules::task::adapter::outgoing::task_query_postgres::{
    count_by_status, count_by_status_grouped,
};
use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::user::adapter::outgoing::sea_orm_entity::users::{self, Column, Entity};
use crate::modules::user::application::domain::entities::UserRole;
use crate::modules::user::application::ports::outgoing::{
    UserDetailView, UserListItem, UserQuery, UserQueryError, UserTaskItem,
};
use crate::shared::pagination::{ListResult, PageRequest};

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn list(&self, page: PageRequest) -> Result<ListResult<UserListItem>, UserQueryError> {
        let query = Entity::find()
            .filter(Column::DeletedAt.is_null())
            .order_by_asc(Column::Id);

        let count = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset)
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        // One grouped query for the whole page
        let ids = rows.iter().map(|u| u.id).collect();
        let mut stats = count_by_status_grouped(&self.db, tasks::Column::AssignedTo, ids)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(|model| {
                let counts = stats.remove(&model.id).unwrap_or_default();
                Ok(UserListItem {
                    id: model.id,
                    role: parse_role(&model.role)?,
                    full_name: model.full_name,
                    email: model.email,
                    created_at: model.created_at.into(),
                    task_stats: counts.into(),
                })
            })
            .collect::<Result<Vec<_>, UserQueryError>>()?;

        Ok(ListResult { items, count })
    }

    async fn get_detail(&self, user_id: i32) -> Result<UserDetailView, UserQueryError> {
        let user = Entity::find_by_id(user_id)
            .filter(Column::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(UserQueryError::NotFound)?;

        let assigned = Condition::all()
            .add(tasks::Column::AssignedTo.eq(user_id))
            .add(tasks::Column::DeletedAt.is_null());

        let counts = count_by_status(&self.db, assigned.clone())
            .await
            .map_err(map_db_err)?;

        let tasks = tasks::Entity::find()
            .filter(assigned)
            .order_by_desc(tasks::Column::CreatedAt)
            .order_by_desc(tasks::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(task_to_item)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(UserDetailView {
            id: user.id,
            role: parse_role(&user.role)?,
            full_name: user.full_name,
            email: user.email,
            created_at: user.created_at.into(),
            updated_at: user.updated_at.into(),
            task_stats: counts.into(),
            tasks,
        })
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn task_to_item(model: tasks::Model) -> Result<UserTaskItem, UserQueryError> {
    Ok(UserTaskItem {
        id: model.id,
        project_id: model.project_id,
        name: model.name,
        description: model.description,
        status: model
            .status
            .parse::<TaskStatus>()
            .map_err(UserQueryError::DatabaseError)?,
        priority: model
            .priority
            .parse::<TaskPriority>()
            .map_err(UserQueryError::DatabaseError)?,
        due_date: model.due_date,
        created_at: model.created_at.into(),
    })
}

fn parse_role(raw: &str) -> Result<UserRole, UserQueryError> {
    raw.parse::<UserRole>().map_err(UserQueryError::DatabaseError)
}

fn map_db_err(e: DbErr) -> UserQueryError {
    UserQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
