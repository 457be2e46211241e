// src/modules/project/application/service/delete_project_service.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    DeleteProjectError, DeleteProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{ProjectArchiver, ProjectArchiverError};

pub struct DeleteProjectService<A>
where
    A: ProjectArchiver,
{
    archiver: A,
}

impl<A> DeleteProjectService<A>
where
    A: ProjectArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> DeleteProjectUseCase for DeleteProjectService<A>
where
    A: ProjectArchiver + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<(), DeleteProjectError> {
        self.archiver
            .soft_delete(project_id)
            .await
            .map_err(|e| match e {
                ProjectArchiverError::NotFound => DeleteProjectError::NotFound,
                ProjectArchiverError::DatabaseError(msg) => DeleteProjectError::RepositoryError(msg),
            })
    }
}
