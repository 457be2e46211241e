// src/modules/task/application/service/get_single_task_service.rs

use async_trait::async_trait;

use crate::modules::task::application::ports::incoming::use_cases::{
    GetSingleTaskError, GetSingleTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{TaskQuery, TaskQueryError, TaskView};

pub struct GetSingleTaskService<Q>
where
    Q: TaskQuery,
{
    query: Q,
}

impl<Q> GetSingleTaskService<Q>
where
    Q: TaskQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSingleTaskUseCase for GetSingleTaskService<Q>
where
    Q: TaskQuery + Send + Sync,
{
    async fn execute(&self, task_id: i32) -> Result<TaskView, GetSingleTaskError> {
        self.query.get_by_id(task_id).await.map_err(|e| match e {
            TaskQueryError::NotFound => GetSingleTaskError::NotFound,
            TaskQueryError::DatabaseError(msg) => GetSingleTaskError::QueryFailed(msg),
        })
    }
}
