use actix_web::{delete, web, Responder};
use tracing::{error, info};

use crate::api::schemas::ErrorResponse;
use crate::modules::user::application::ports::incoming::use_cases::DeleteUserError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Soft-delete a user
#[utoipa::path(
    delete,
    path = "/api/v1/user/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found or already deleted", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[delete("/api/v1/user/{id}")]
pub async fn delete_user_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data.user.delete.execute(user_id).await {
        Ok(()) => {
            info!(user_id, "User soft-deleted");
            ApiResponse::no_content()
        }

        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::RepositoryError(msg)) => {
            error!(user_id, error = %msg, "Failed to delete user");
            ApiResponse::database_error(&msg)
        }
    }
}
