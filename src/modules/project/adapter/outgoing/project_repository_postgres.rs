// src/modules/project/adapter/outgoing/project_repository_postgres.rs

use async_trait::async_trait;
use chrono::Utc;

use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, PatchProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};
use crate::shared::patch_field::PatchField;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: CreateProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            owner_id: Set(data.owner_id),
            created_at: Set(now),
            updated_at: Set(now),
            deleted_at: Set(None),
        };

        let result = model
            .insert(&*self.db)
            .await
            .map_err(map_reference_error)?;

        Ok(model_to_result(result))
    }

    async fn patch_project(
        &self,
        project_id: i32,
        data: PatchProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let PatchField::Value(name) = data.name {
            model.name = Set(name);
        }

        if let PatchField::Value(description) = data.description {
            model.description = Set(description);
        }

        if let PatchField::Value(owner_id) = data.owner_id {
            model.owner_id = Set(owner_id);
        }

        let has_changes =
            model.name.is_set() || model.description.is_set() || model.owner_id.is_set();

        if !has_changes {
            let result = Entity::find_by_id(project_id)
                .filter(Column::DeletedAt.is_null())
                .one(&*self.db)
                .await
                .map_err(map_db_err)?
                .ok_or(ProjectRepositoryError::NotFound)?;

            return Ok(model_to_result(result));
        }

        model.updated_at = Set(Utc::now().fixed_offset());

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(project_id))
            .filter(Column::DeletedAt.is_null())
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_reference_error)?;

        results
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(ProjectRepositoryError::NotFound)
    }
}

fn model_to_result(model: projects::Model) -> ProjectResult {
    ProjectResult {
        id: model.id,
        name: model.name,
        description: model.description,
        owner_id: model.owner_id,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

fn map_reference_error(e: DbErr) -> ProjectRepositoryError {
    let msg = e.to_string();
    let lower = msg.to_lowercase();

    if lower.contains("foreign key") || lower.contains("23503") {
        ProjectRepositoryError::InvalidReference(msg)
    } else {
        ProjectRepositoryError::DatabaseError(msg)
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}
