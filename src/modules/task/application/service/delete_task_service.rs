// src/modules/task/application/service/delete_task_service.rs

use async_trait::async_trait;

use crate::modules::task::application::ports::incoming::use_cases::{
    DeleteTaskError, DeleteTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{TaskArchiver, TaskArchiverError};

pub struct DeleteTaskService<A>
where
    A: TaskArchiver,
{
    archiver: A,
}

impl<A> DeleteTaskService<A>
where
    A: TaskArchiver,
{
    pub fn new(archiver: A) -> Self {
        Self { archiver }
    }
}

#[async_trait]
impl<A> DeleteTaskUseCase for DeleteTaskService<A>
where
    A: TaskArchiver + Send + Sync,
{
    async fn execute(&self, task_id: i32) -> Result<(), DeleteTaskError> {
        self.archiver
            .soft_delete(task_id)
            .await
            .map_err(|e| match e {
                TaskArchiverError::NotFound => DeleteTaskError::NotFound,
                TaskArchiverError::DatabaseError(msg) => DeleteTaskError::RepositoryError(msg),
            })
    }
}
