// src/modules/project/application/service/update_project_service.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    PatchProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

pub struct UpdateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> UpdateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> UpdateProjectUseCase for UpdateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        project_id: i32,
        command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        let data = PatchProjectData {
            name: command.name.try_map(|name| match name.trim() {
                "" => Err(UpdateProjectError::EmptyName),
                name => Ok(name.to_string()),
            })?,
            description: command.description,
            owner_id: command.owner_id,
        };

        self.project_repository
            .patch_project(project_id, data)
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::NotFound => UpdateProjectError::NotFound,

                ProjectRepositoryError::InvalidReference(msg) => {
                    UpdateProjectError::InvalidReference(msg)
                }

                ProjectRepositoryError::DatabaseError(msg) => {
                    UpdateProjectError::RepositoryError(msg)
                }
            })
    }
}
