use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::application::ports::outgoing::{ProjectListFilter, ProjectListItem};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListResult, PageRequest};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetProjectsQuery {
    /// Page size; all projects when omitted
    pub limit: Option<u64>,
    /// 1-based page number
    pub offset: Option<u64>,
    pub owner_id: Option<i32>,
}

/// List projects with per-project task statistics
#[utoipa::path(
    get,
    path = "/api/v1/projects/list",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Projects", body = inline(SuccessResponse<ListResult<ProjectListItem>>)),
        (status = 400, description = "Invalid limit or page", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/projects/list")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    let page = match PageRequest::from_page(q.limit, q.offset) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let filter = ProjectListFilter {
        owner_id: q.owner_id,
    };

    match data.project.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list projects");
            ApiResponse::database_error(&msg)
        }
    }
}
