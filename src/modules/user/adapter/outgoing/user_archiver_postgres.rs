// src/modules/user/adapter/outgoing/user_archiver_postgres.rs

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};
use std::sync::Arc;

use crate::modules::user::adapter::outgoing::sea_orm_entity::users::{Column, Entity};
use crate::modules::user::application::ports::outgoing::{UserArchiver, UserArchiverError};

#[derive(Clone)]
pub struct UserArchiverPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserArchiverPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserArchiver for UserArchiverPostgres {
    async fn soft_delete(&self, user_id: i32) -> Result<(), UserArchiverError> {
        let res = Entity::update_many()
            .col_expr(Column::DeletedAt, Expr::value(Utc::now().fixed_offset()))
            .filter(Column::Id.eq(user_id))
            .filter(Column::DeletedAt.is_null()) // state-aware
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if res.rows_affected == 0 {
            return Err(UserArchiverError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> UserArchiverError {
    UserArchiverError::DatabaseError(e.to_string())
}
