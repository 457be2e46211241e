// src/modules/task/application/service/create_task_service.rs

use async_trait::async_trait;

use crate::modules::task::application::domain::entities::{
    parse_due_date, TaskPriority, TaskStatus,
};
use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskCommand, CreateTaskError, CreateTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{
    CreateTaskData, TaskRepository, TaskRepositoryError, TaskView,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateTaskService<R>
where
    R: TaskRepository,
{
    task_repository: R,
}

impl<R> CreateTaskService<R>
where
    R: TaskRepository,
{
    pub fn new(task_repository: R) -> Self {
        Self { task_repository }
    }
}

#[async_trait]
impl<R> CreateTaskUseCase for CreateTaskService<R>
where
    R: TaskRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTaskCommand) -> Result<TaskView, CreateTaskError> {
        let data = validate(command)?;

        self.task_repository
            .create_task(data)
            .await
            .map_err(|e| match e {
                TaskRepositoryError::InvalidReference(msg) => {
                    CreateTaskError::InvalidReference(msg)
                }

                TaskRepositoryError::DatabaseError(msg) => CreateTaskError::RepositoryError(msg),

                TaskRepositoryError::NotFound => CreateTaskError::RepositoryError(
                    "unexpected not found while creating task".to_string(),
                ),
            })
    }
}

/// Checks fields in the order clients see them reported.
fn validate(command: CreateTaskCommand) -> Result<CreateTaskData, CreateTaskError> {
    let project_id = command
        .project_id
        .ok_or(CreateTaskError::MissingField("project_id"))?;
    let name = required_text(command.name, "name")?;
    let description = required_text(command.description, "description")?;
    let assigned_to = command
        .assigned_to
        .ok_or(CreateTaskError::MissingField("assigned_to"))?;
    let status = required_text(command.status, "status")?
        .parse::<TaskStatus>()
        .map_err(CreateTaskError::InvalidStatus)?;
    let priority = required_text(command.priority, "priority")?
        .parse::<TaskPriority>()
        .map_err(CreateTaskError::InvalidPriority)?;
    let due_date = command
        .due_date
        .map(|raw| parse_due_date(&raw).map_err(CreateTaskError::InvalidDueDate))
        .transpose()?;

    Ok(CreateTaskData {
        project_id,
        name,
        description,
        assigned_to: Some(assigned_to),
        status,
        priority,
        due_date,
    })
}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, CreateTaskError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(CreateTaskError::MissingField(field)),
    }
}
