// src/modules/task/adapter/outgoing/task_archiver_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::task::adapter::outgoing::sea_orm_entity::tasks::{Column, Entity};
use crate::modules::task::application::ports::outgoing::{TaskArchiver, TaskArchiverError};

#[derive(Clone)]
pub struct TaskArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl TaskArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TaskArchiver for TaskArchiverPostgres {
    async fn soft_delete(&self, task_id: i32) -> Result<(), TaskArchiverError> {
        let res = Entity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(task_id))
            .filter(Column::DeletedAt.is_null()) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(TaskArchiverError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TaskArchiverError {
    TaskArchiverError::DatabaseError(e.to_string())
}
