use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetSingleProjectError;
use crate::modules::project::application::ports::outgoing::ProjectDetailView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a project with its task statistics
#[utoipa::path(
    get,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    responses(
        (status = 200, description = "Project detail", body = inline(SuccessResponse<ProjectDetailView>)),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/projects/{id}")]
pub async fn get_single_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.get_single.execute(project_id).await {
        Ok(project) => ApiResponse::success(project),

        Err(GetSingleProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(GetSingleProjectError::QueryFailed(msg)) => {
            error!(project_id, error = %msg, "Failed to fetch project");
            ApiResponse::database_error(&msg)
        }
    }
}
