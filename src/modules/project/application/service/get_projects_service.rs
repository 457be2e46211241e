// src/modules/project/application/service/get_projects_service.rs

use async_trait::async_trait;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectsError, GetProjectsUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectListItem, ProjectQuery,
};
use crate::shared::pagination::{ListResult, PageRequest};

pub struct GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectsService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectsUseCase for GetProjectsService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: ProjectListFilter,
        page: PageRequest,
    ) -> Result<ListResult<ProjectListItem>, GetProjectsError> {
        self.query
            .list(filter, page)
            .await
            .map_err(GetProjectsError::from)
    }
}
