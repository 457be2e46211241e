use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::modules::task::application::ports::incoming::use_cases::DeleteTaskError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete a task
#[utoipa::path(
    delete,
    path = "/api/v1/task/{id}",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 204, description = "Task deleted"),
        (status = 404, description = "Task not found or already deleted", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/task/{id}")]
pub async fn delete_task_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = path.into_inner();

    match data.task.delete.execute(task_id).await {
        Ok(()) => {
            info!(task_id, "Task soft-deleted");
            ApiResponse::no_content()
        }

        Err(DeleteTaskError::NotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }

        Err(DeleteTaskError::RepositoryError(msg)) => {
            error!(task_id, error = %msg, "Failed to delete task");
            ApiResponse::database_error(&msg)
        }
    }
}
