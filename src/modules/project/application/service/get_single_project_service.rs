// src/modules/project/application/service/get_single_project_service.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetSingleProjectError, GetSingleProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectDetailView, ProjectQuery, ProjectQueryError,
};

pub struct GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetSingleProjectService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleProjectUseCase for GetSingleProjectService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<ProjectDetailView, GetSingleProjectError> {
        self.query.get_by_id(project_id).await.map_err(|e| match e {
            ProjectQueryError::NotFound => GetSingleProjectError::NotFound,
            ProjectQueryError::DatabaseError(msg) => GetSingleProjectError::QueryFailed(msg),
        })
    }
}
