// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{Column, Entity};
use crate::modules::project::application::ports::outgoing::{
    ProjectDetailView, ProjectListFilter, ProjectListItem, ProjectQuery, ProjectQueryError,
};
use crate::modules::task::adapter::outgoing::sea_orm_entity::tasks;
use crate::modules::task::adapter::outgoing::task_query_postgres::{
    count_by_status, count_by_status_grouped,
};
use crate::shared::pagination::{ListResult, PageRequest};

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<ListResult<ProjectListItem>, ProjectQueryError> {
        let mut condition = Condition::all().add(Column::DeletedAt.is_null());
        if let Some(owner_id) = filter.owner_id {
            condition = condition.add(Column::OwnerId.eq(owner_id));
        }

        let query = Entity::find().filter(condition).order_by_asc(Column::Id);

        let count = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let rows = query
            .offset(page.offset)
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let ids = rows.iter().map(|p| p.id).collect();
        let mut stats = count_by_status_grouped(&self.db, tasks::Column::ProjectId, ids)
            .await
            .map_err(map_db_err)?;

        let items = rows
            .into_iter()
            .map(|model| ProjectListItem {
                task_stats: stats.remove(&model.id).unwrap_or_default().into(),
                id: model.id,
                name: model.name,
                description: model.description,
                owner_id: model.owner_id,
                created_at: model.created_at.into(),
            })
            .collect();

        Ok(ListResult { items, count })
    }

    async fn get_by_id(&self, project_id: i32) -> Result<ProjectDetailView, ProjectQueryError> {
        let project = Entity::find_by_id(project_id)
            .filter(Column::DeletedAt.is_null())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        let counts = count_by_status(
            &self.db,
            Condition::all()
                .add(tasks::Column::ProjectId.eq(project_id))
                .add(tasks::Column::DeletedAt.is_null()),
        )
        .await
        .map_err(map_db_err)?;

        Ok(ProjectDetailView {
            id: project.id,
            name: project.name,
            description: project.description,
            owner_id: project.owner_id,
            created_at: project.created_at.into(),
            updated_at: project.updated_at.into(),
            task_stats: counts.into(),
        })
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}
