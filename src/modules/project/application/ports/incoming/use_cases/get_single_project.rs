use async_trait::async_trait;

use crate::modules::project::application::ports::outgoing::ProjectDetailView;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: i32) -> Result<ProjectDetailView, GetSingleProjectError>;
}
