// src/modules/task/application/service/update_task_service.rs

use async_trait::async_trait;

use crate::modules::task::application::domain::entities::{
    parse_due_date, TaskPriority, TaskStatus,
};
use crate::modules::task::application::ports::incoming::use_cases::{
    UpdateTaskCommand, UpdateTaskError, UpdateTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    PatchTaskData, TaskRepository, TaskRepositoryError, TaskView,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct UpdateTaskService<R>
where
    R: TaskRepository,
{
    task_repository: R,
}

impl<R> UpdateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(task_repository: R) -> Self {
        Self { task_repository }
    }
}

#[async_trait]
impl<R> UpdateTaskUseCase for UpdateTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(
        &self,
        task_id: i32,
        command: UpdateTaskCommand,
    ) -> Result<TaskView, UpdateTaskError> {
        let data = PatchTaskData {
            project_id: command.project_id,
            name: command.name.try_map(|v| non_empty(v, "name"))?,
            description: command.description.try_map(|v| non_empty(v, "description"))?,
            assigned_to: command.assigned_to,
            status: command
                .status
                .try_map(|s| s.parse::<TaskStatus>())
                .map_err(UpdateTaskError::InvalidStatus)?,
            priority: command
                .priority
                .try_map(|s| s.parse::<TaskPriority>())
                .map_err(UpdateTaskError::InvalidPriority)?,
            due_date: command
                .due_date
                .try_map(|s| parse_due_date(&s))
                .map_err(UpdateTaskError::InvalidDueDate)?,
        };

        self.task_repository
            .patch_task(task_id, data)
            .await
            .map_err(|e| match e {
                TaskRepositoryError::NotFound => UpdateTaskError::NotFound,

                TaskRepositoryError::InvalidReference(msg) => {
                    UpdateTaskError::InvalidReference(msg)
                }

                TaskRepositoryError::DatabaseError(msg) => UpdateTaskError::RepositoryError(msg),
            })
    }
}

fn non_empty(value: String, field: &'static str) -> Result<String, UpdateTaskError> {
    match value.trim() {
        "" => Err(UpdateTaskError::EmptyField(field)),
        v => Ok(v.to_string()),
    }
}
