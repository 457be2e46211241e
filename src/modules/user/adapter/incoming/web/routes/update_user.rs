use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError,
};
use crate::modules::user::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

/// Partial update; `null` leaves a field unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub full_name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub email: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>, example = "manager")]
    pub role: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub password: PatchField<String>,
}

impl From<UpdateUserRequest> for UpdateUserCommand {
    fn from(req: UpdateUserRequest) -> Self {
        UpdateUserCommand {
            full_name: req.full_name,
            email: req.email,
            role: req.role,
            password: req.password,
        }
    }
}

fn map_update_user_error(user_id: i32, err: UpdateUserError) -> HttpResponse {
    match &err {
        UpdateUserError::NotFound => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        UpdateUserError::EmptyFullName => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        UpdateUserError::InvalidRole(msg) => ApiResponse::bad_request("INVALID_ROLE", msg),

        UpdateUserError::InvalidEmail(msg) => ApiResponse::bad_request("INVALID_EMAIL", msg),

        UpdateUserError::EmailAlreadyExists => {
            warn!(user_id, "User update rejected: email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        UpdateUserError::HashFailed(msg) => {
            error!(user_id, error = %msg, "Password hashing failed");
            ApiResponse::internal_error()
        }

        UpdateUserError::RepositoryError(msg) => {
            error!(user_id, error = %msg, "Failed to update user");
            ApiResponse::database_error(msg)
        }
    }
}

/// Update a user
#[utoipa::path(
    put,
    path = "/api/v1/user/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated user", body = inline(SuccessResponse<UserResult>)),
        (status = 400, description = "Validation error", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 409, description = "Email already exists", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[put("/api/v1/user/{id}")]
pub async fn update_user_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = path.into_inner();

    match data
        .user
        .update
        .execute(user_id, req.into_inner().into())
        .await
    {
        Ok(updated) => ApiResponse::success(updated),
        Err(e) => map_update_user_error(user_id, e),
    }
}
