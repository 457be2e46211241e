use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::task::application::ports::incoming::use_cases::{
    UpdateTaskCommand, UpdateTaskError,
};
use crate::modules::task::application::ports::outgoing::TaskView;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Partial update. Omitted fields are untouched; `null` clears
/// `assigned_to`/`due_date` and is ignored for the other fields.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub project_id: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub assigned_to: PatchField<i32>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "completed")]
    pub status: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "high")]
    pub priority: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "2025-04-15")]
    pub due_date: PatchField<String>,
}

impl From<UpdateTaskRequest> for UpdateTaskCommand {
    fn from(req: UpdateTaskRequest) -> Self {
        UpdateTaskCommand {
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

fn map_update_task_error(task_id: i32, err: UpdateTaskError) -> HttpResponse {
    match &err {
        UpdateTaskError::NotFound => ApiResponse::not_found("TASK_NOT_FOUND", "Task not found"),

        UpdateTaskError::EmptyField(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        UpdateTaskError::InvalidStatus(msg) => ApiResponse::bad_request("INVALID_STATUS", msg),

        UpdateTaskError::InvalidPriority(msg) => {
            ApiResponse::bad_request("INVALID_PRIORITY", msg)
        }

        UpdateTaskError::InvalidDueDate(_) => {
            ApiResponse::bad_request("INVALID_FORMAT", &err.to_string())
        }

        UpdateTaskError::InvalidReference(msg) => {
            warn!(task_id, error = %msg, "Task update references a missing row");
            ApiResponse::bad_request(
                "INVALID_REFERENCE",
                "project_id or assigned_to does not reference an existing row",
            )
        }

        UpdateTaskError::RepositoryError(msg) => {
            error!(task_id, error = %msg, "Failed to update task");
            ApiResponse::database_error(msg)
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Update a task
#[utoipa::path(
    put,
    path = "/api/v1/task/{id}",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Updated task", body = inline(SuccessResponse<TaskView>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[put("/api/v1/task/{id}")]
pub async fn update_task_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateTaskRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = path.into_inner();

    match data
        .task
        .update
        .execute(task_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_update_task_error(task_id, e),
    }
}
