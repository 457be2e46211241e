// src/modules/task/application/service/get_tasks_service.rs

use async_trait::async_trait;

use crate::modules::task::application::ports::incoming::use_cases::{
    GetTasksError, GetTasksUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    TaskListFilter, TaskListResult, TaskQuery,
};
use crate::shared::pagination::PageRequest;

pub struct GetTasksService<Q>
where
    Q: TaskQuery,
{
    query: Q,
}

impl<Q> GetTasksService<Q>
where
    Q: TaskQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTasksUseCase for GetTasksService<Q>
where
    Q: TaskQuery + Send + Sync,
{
    async fn execute(
        &self,
        filter: TaskListFilter,
        page: PageRequest,
    ) -> Result<TaskListResult, GetTasksError> {
        self.query.list(filter, page).await.map_err(GetTasksError::from)
    }
}
