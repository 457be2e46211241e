use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::patch_field::PatchField;

#[derive(Debug, Clone, Default)]
pub struct UpdateProjectCommand {
    pub name: PatchField<String>,
    pub description: PatchField<String>,
    pub owner_id: PatchField<i32>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("name must not be empty")]
    EmptyName,

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProjectUseCase: Send + Sync {
    async fn execute(
        &self,
        project_id: i32,
        command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError>;
}
