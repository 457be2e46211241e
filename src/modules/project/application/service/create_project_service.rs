// src/modules/project/application/service/create_project_service.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    CreateProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};

pub struct CreateProjectService<R>
where
    R: ProjectRepository,
{
    project_repository: R,
}

impl<R> CreateProjectService<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repository: R) -> Self {
        Self { project_repository }
    }
}

#[async_trait]
impl<R> CreateProjectUseCase for CreateProjectService<R>
where
    R: ProjectRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        let name = match command.name {
            Some(name) if !name.trim().is_empty() => name.trim().to_string(),
            _ => return Err(CreateProjectError::MissingField("name")),
        };
        let owner_id = command
            .owner_id
            .ok_or(CreateProjectError::MissingField("owner_id"))?;

        self.project_repository
            .create_project(CreateProjectData {
                name,
                description: command.description.unwrap_or_default(),
                owner_id,
            })
            .await
            .map_err(|e| match e {
                ProjectRepositoryError::InvalidReference(msg) => {
                    CreateProjectError::InvalidReference(msg)
                }

                ProjectRepositoryError::DatabaseError(msg) => {
                    CreateProjectError::RepositoryError(msg)
                }

                ProjectRepositoryError::NotFound => CreateProjectError::RepositoryError(
                    "unexpected not found while creating project".to_string(),
                ),
            })
    }
}
