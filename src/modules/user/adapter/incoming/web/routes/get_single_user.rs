use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::ports::incoming::use_cases::GetSingleUserError;
use crate::modules::user::application::ports::outgoing::UserDetailView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a user with task statistics and assigned tasks
#[utoipa::path(
    get,
    path = "/api/v1/user/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User detail", body = inline(SuccessResponse<UserDetailView>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/user/{id}")]
pub async fn get_single_user_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user.get_single.execute(user_id).await {
        Ok(detail) => ApiResponse::success(detail),

        Err(GetSingleUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(GetSingleUserError::QueryFailed(msg)) => {
            error!(user_id, error = %msg, "Failed to fetch user");
            ApiResponse::database_error(&msg)
        }
    }
}
