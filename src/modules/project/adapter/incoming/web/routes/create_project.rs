use actix_web::{post, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError,
};
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    #[schema(example = "Website relaunch")]
    pub name: Option<String>,

    /// Defaults to an empty string
    #[schema(example = "New landing pages and docs")]
    pub description: Option<String>,

    #[schema(example = 1)]
    pub owner_id: Option<i32>,
}

impl From<CreateProjectRequest> for CreateProjectCommand {
    fn from(req: CreateProjectRequest) -> Self {
        CreateProjectCommand {
            name: req.name,
            description: req.description,
            owner_id: req.owner_id,
        }
    }
}

fn map_create_project_error(err: CreateProjectError) -> HttpResponse {
    match &err {
        CreateProjectError::MissingField(_) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        CreateProjectError::InvalidReference(msg) => {
            warn!(error = %msg, "Project owner does not exist");
            ApiResponse::bad_request(
                "INVALID_REFERENCE",
                "owner_id does not reference an existing user",
            )
        }

        CreateProjectError::RepositoryError(msg) => {
            error!(error = %msg, "Failed to create project");
            ApiResponse::database_error(msg)
        }
    }
}

/// Create a project
#[utoipa::path(
    post,
    path = "/api/v1/projects/create",
    tag = "projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 201, description = "Project created", body = inline(SuccessResponse<ProjectResult>)),
        (
            status = 400,
            description = "Missing field or unknown owner",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "VALIDATION_ERROR", "message": "name is required" }
            })
        ),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[post("/api/v1/projects/create")]
pub async fn create_project_handler(
    req: web::Json<CreateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.project.create.execute(req.into_inner().into()).await {
        Ok(project) => {
            info!(project_id = project.id, owner_id = project.owner_id, "Project created");
            ApiResponse::created(project)
        }

        Err(e) => map_create_project_error(e),
    }
}
