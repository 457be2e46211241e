use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskCommand, CreateTaskError,
};
use crate::modules::task::application::ports::outgoing::TaskView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for task creation. Presence is checked by the use case so
/// missing fields are reported one at a time.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateTaskRequest {
    #[schema(example = 1)]
    pub project_id: Option<i32>,

    #[schema(example = "Design schema")]
    pub name: Option<String>,

    #[schema(example = "Tables for users, projects and tasks")]
    pub description: Option<String>,

    #[schema(example = 2)]
    pub assigned_to: Option<i32>,

    #[schema(example = "pending")]
    pub status: Option<String>,

    #[schema(example = "medium")]
    pub priority: Option<String>,

    /// YYYY-MM-DD
    #[schema(example = "2025-03-31")]
    pub due_date: Option<String>,
}

impl From<CreateTaskRequest> for CreateTaskCommand {
    fn from(req: CreateTaskRequest) -> Self {
        CreateTaskCommand {
            project_id: req.project_id,
            name: req.name,
            description: req.description,
            assigned_to: req.assigned_to,
            status: req.status,
            priority: req.priority,
            due_date: req.due_date,
        }
    }
}

fn map_create_task_error(err: CreateTaskError) -> HttpResponse {
    match &err {
        CreateTaskError::MissingField(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        CreateTaskError::InvalidStatus(msg) => ApiResponse::bad_request("INVALID_STATUS", msg),

        CreateTaskError::InvalidPriority(msg) => {
            ApiResponse::bad_request("INVALID_PRIORITY", msg)
        }

        CreateTaskError::InvalidDueDate(_) => {
            ApiResponse::bad_request("INVALID_FORMAT", &err.to_string())
        }

        CreateTaskError::InvalidReference(msg) => {
            warn!(error = %msg, "Task references a missing project or user");
            ApiResponse::bad_request(
                "INVALID_REFERENCE",
                "project_id or assigned_to does not reference an existing row",
            )
        }

        CreateTaskError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create task");
            ApiResponse::database_error(msg)
        }
    }
}

/// Create a task
#[utoipa::path(
    post,
    path = "/api/v1/task/create",
    tag = "tasks",
    request_body = CreateTaskRequest,
    responses(
        (status = 201, description = "Task created", body = inline(SuccessResponse<TaskView>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Missing field" = (value = json!({
                    "success": false,
                    "error": { "code": "VALIDATION_ERROR", "message": "project_id is required" }
                }))),
                ("Invalid status" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_STATUS",
                        "message": "status must be one of pending, in_progress, completed (got 'done')"
                    }
                })))
            )
        ),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[post("/api/v1/task/create")]
pub async fn create_task_handler(
    req: web::Json<CreateTaskRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.task.create.execute(req.into_inner().into()).await {
        Ok(task) => {
            info!(task_id = task.id, project_id = task.project_id, "Task created");
            ApiResponse::created(task)
        }

        Err(e) => map_create_task_error(e),
    }
}
