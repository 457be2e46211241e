use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::ports::incoming::use_cases::GetUsersError;
use crate::modules::user::application::ports::outgoing::UserListItem;
use crate::shared::api::ApiResponse;
use crate::shared::pagination::{ListResult, PageRequest};
use crate::AppState;

#[derive(Debug, Deserialize, IntoParams)]
pub struct GetUsersQuery {
    /// Page size; all users when omitted
    pub limit: Option<u64>,
    /// 1-based page number, only applied together with `limit`
    pub offset: Option<u64>,
}

/// List users with their task statistics
#[utoipa::path(
    get,
    path = "/api/v1/user/list",
    tag = "users",
    params(GetUsersQuery),
    responses(
        (status = 200, description = "Users", body = inline(SuccessResponse<ListResult<UserListItem>>)),
        (status = 400, description = "Invalid limit or page", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/user/list")]
pub async fn get_users_handler(
    query: web::Query<GetUsersQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let q = query.into_inner();

    let page = match PageRequest::from_page(q.limit, q.offset) {
        Ok(page) => page,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data.user.get_list.execute(page).await {
        Ok(result) => ApiResponse::success(result),

        Err(GetUsersError::QueryFailed(msg)) => {
            error!(error = %msg, "Failed to list users");
            ApiResponse::database_error(&msg)
        }
    }
}
