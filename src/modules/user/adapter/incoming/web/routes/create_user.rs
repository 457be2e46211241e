use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError,
};
use crate::modules::user::application::ports::outgoing::UserResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Request body for user creation
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,

    /// manager | worker
    #[schema(example = "worker")]
    pub role: Option<String>,

    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,

    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
}

impl From<CreateUserRequest> for CreateUserCommand {
    fn from(req: CreateUserRequest) -> Self {
        CreateUserCommand {
            email: req.email,
            role: req.role,
            full_name: req.full_name,
            password: req.password,
        }
    }
}

fn map_create_user_error(err: CreateUserError) -> HttpResponse {
    match &err {
        CreateUserError::MissingField(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        CreateUserError::InvalidRole(msg) => ApiResponse::bad_request("INVALID_ROLE", msg),

        CreateUserError::InvalidEmail(msg) => ApiResponse::bad_request("INVALID_EMAIL", msg),

        CreateUserError::EmailAlreadyExists => {
            warn!("User creation rejected: email already exists");
            ApiResponse::conflict("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        CreateUserError::HashFailed(msg) => {
            error!(error = %msg, "Password hashing failed");
            ApiResponse::internal_error()
        }

        CreateUserError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create user");
            ApiResponse::database_error(msg)
        }
    }
}

/// Create a user
///
/// The password is stored as an argon2id hash and never returned.
#[utoipa::path(
    post,
    path = "/api/v1/user/create",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = inline(SuccessResponse<UserResult>)),
        (
            status = 400,
            description = "Validation error",
            body = ErrorResponse,
            examples(
                ("Missing field" = (value = json!({
                    "success": false,
                    "error": { "code": "VALIDATION_ERROR", "message": "email is required" }
                }))),
                ("Invalid role" = (value = json!({
                    "success": false,
                    "error": {
                        "code": "INVALID_ROLE",
                        "message": "role must be one of manager, worker (got 'admin')"
                    }
                })))
            )
        ),
        (
            status = 409,
            description = "Email already exists",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMAIL_ALREADY_EXISTS", "message": "Email already exists" }
            })
        ),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[post("/api/v1/user/create")]
pub async fn create_user_handler(
    req: web::Json<CreateUserRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.create.execute(req.into_inner().into()).await {
        Ok(user) => {
            info!(user_id = user.id, role = %user.role, "User created");
            ApiResponse::created(user)
        }

        Err(e) => map_create_user_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::user::application::ports::incoming::use_cases::CreateUserUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::user_result;

    #[derive(Clone)]
    struct MockCreateUserUseCase {
        result: Result<UserResult, CreateUserError>,
    }

    #[async_trait]
    impl CreateUserUseCase for MockCreateUserUseCase {
        async fn execute(&self, _command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
            self.result.clone()
        }
    }

    async fn call(result: Result<UserResult, CreateUserError>) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_create_user(MockCreateUserUseCase { result })
            .build();
        let app =
            test::init_service(App::new().app_data(app_state).service(create_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/v1/user/create")
            .set_json(json!({
                "email": "jane@example.com",
                "role": "worker",
                "full_name": "Jane Doe",
                "password": "secret"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }

    #[actix_web::test]
    async fn test_create_user_created_without_password() {
        let (status, body) = call(Ok(user_result(12))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["id"], 12);
        assert!(body["data"].get("password").is_none());
    }

    #[actix_web::test]
    async fn test_create_user_error_codes() {
        let (status, body) = call(Err(CreateUserError::MissingField("role"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "role is required");

        let (status, body) = call(Err(CreateUserError::InvalidRole("bad".to_string()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_ROLE");

        let (status, body) = call(Err(CreateUserError::InvalidEmail("bad".to_string()))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "INVALID_EMAIL");

        let (status, body) = call(Err(CreateUserError::EmailAlreadyExists)).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");

        let (status, body) = call(Err(CreateUserError::RepositoryError("down".to_string()))).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "DATABASE_ERROR");
    }
}
