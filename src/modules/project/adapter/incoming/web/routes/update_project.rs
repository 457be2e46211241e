use actix_web::{put, web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateProjectCommand, UpdateProjectError,
};
use crate::modules::project::application::ports::outgoing::ProjectResult;
use crate::shared::api::ApiResponse;
use crate::shared::patch_field::PatchField;
use crate::AppState;

/// Partial update; `null` leaves a field unchanged.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateProjectRequest {
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub name: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: PatchField<String>,

    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub owner_id: PatchField<i32>,
}

impl From<UpdateProjectRequest> for UpdateProjectCommand {
    fn from(req: UpdateProjectRequest) -> Self {
        UpdateProjectCommand {
            name: req.name,
            description: req.description,
            owner_id: req.owner_id,
        }
    }
}

fn map_update_project_error(project_id: i32, err: UpdateProjectError) -> HttpResponse {
    match &err {
        UpdateProjectError::NotFound => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        UpdateProjectError::EmptyName => {
            ApiResponse::bad_request("VALIDATION_ERROR", &err.to_string())
        }

        UpdateProjectError::InvalidReference(msg) => {
            warn!(project_id, error = %msg, "Project owner does not exist");
            ApiResponse::bad_request(
                "INVALID_REFERENCE",
                "owner_id does not reference an existing user",
            )
        }

        UpdateProjectError::RepositoryError(msg) => {
            error!(project_id, error = %msg, "Failed to update project");
            ApiResponse::database_error(msg)
        }
    }
}

/// Update a project
#[utoipa::path(
    put,
    path = "/api/v1/projects/{id}",
    tag = "projects",
    params(("id" = i32, Path, description = "Project id")),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Updated project", body = inline(SuccessResponse<ProjectResult>)),
        (status = 400, description = "Blank name or unknown owner", body = ErrorResponse),
        (status = 404, description = "Project not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[put("/api/v1/projects/{id}")]
pub async fn update_project_handler(
    path: web::Path<i32>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data
        .project
        .update
        .execute(project_id, req.into_inner().into())
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(e) => map_update_project_error(project_id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::project::application::ports::incoming::use_cases::UpdateProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::project_result;

    #[derive(Clone)]
    struct MockUpdateProjectUseCase {
        result: Result<ProjectResult, UpdateProjectError>,
        received: Arc<Mutex<Option<UpdateProjectCommand>>>,
    }

    #[async_trait]
    impl UpdateProjectUseCase for MockUpdateProjectUseCase {
        async fn execute(
            &self,
            _project_id: i32,
            command: UpdateProjectCommand,
        ) -> Result<ProjectResult, UpdateProjectError> {
            *self.received.lock().unwrap() = Some(command);
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_update_project_decodes_absent_and_null() {
        let uc = MockUpdateProjectUseCase {
            result: Ok(project_result(3)),
            received: Arc::new(Mutex::new(None)),
        };
        let received = uc.received.clone();

        let app_state = TestAppStateBuilder::default()
            .with_update_project(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/projects/3")
            .set_json(json!({ "name": "Renamed", "description": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let command = received.lock().unwrap().clone().unwrap();
        assert_eq!(command.name, PatchField::Value("Renamed".to_string()));
        assert!(command.description.is_null());
        assert!(command.owner_id.is_unset());
    }

    #[actix_web::test]
    async fn test_update_project_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdateProjectUseCase {
                result: Err(UpdateProjectError::NotFound),
                received: Arc::new(Mutex::new(None)),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/projects/3")
            .set_json(json!({ "name": "Renamed" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_project_blank_name_is_validation_error() {
        let app_state = TestAppStateBuilder::default()
            .with_update_project(MockUpdateProjectUseCase {
                result: Err(UpdateProjectError::EmptyName),
                received: Arc::new(Mutex::new(None)),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(update_project_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/v1/projects/3")
            .set_json(json!({ "name": "  " }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(body["error"]["message"], "name must not be empty");
    }
}
