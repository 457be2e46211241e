use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::task::application::ports::incoming::use_cases::GetTasksError;
use crate::modules::task::application::ports::outgoing::{TaskListFilter, TaskListResult};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

const DEFAULT_LIMIT: u64 = 10;
const DEFAULT_PAGE: u64 = 1;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetTasksQuery {
    /// Page size (default 10)
    pub limit: Option<u64>,
    /// 1-based page number (default 1)
    pub offset: Option<u64>,
    pub project_id: Option<i32>,
}

/// List tasks
///
/// Returns one page of live tasks plus the filtered total and status statistics.
#[utoipa::path(
    get,
    path = "/api/v1/task/list",
    tag = "tasks",
    params(GetTasksQuery),
    responses(
        (status = 200, description = "Tasks page", body = inline(SuccessResponse<TaskListResult>)),
        (status = 400, description = "Invalid limit or page", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/task/list")]
pub async fn get_tasks_handler(
    query: web::Query<GetTasksQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    let page = match PageRequest::from_page(
        Some(q.limit.unwrap_or(DEFAULT_LIMIT)),
        Some(q.offset.unwrap_or(DEFAULT_PAGE)),
    ) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    let filter = TaskListFilter {
        project_id: q.project_id,
    };

    match data.task.get_list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetTasksError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list tasks");
            ApiResponse::database_error(&msg)
        }
    }
}
