use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::task::application::ports::incoming::use_cases::GetSingleTaskError;
use crate::modules::task::application::ports::outgoing::TaskView;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Get a task by id
#[utoipa::path(
    get,
    path = "/api/v1/task/{id}",
    tag = "tasks",
    params(("id" = i32, Path, description = "Task id")),
    responses(
        (status = 200, description = "Task", body = inline(SuccessResponse<TaskView>)),
        (status = 404, description = "Task not found", body = ErrorResponse),
        (status = 500, description = "Database error", body = ErrorResponse),
    )
)]
#[get("/api/v1/task/{id}")]
pub async fn get_single_task_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let task_id = path.into_inner();

    match data.task.get_single.execute(task_id).await {
        Ok(task) => ApiResponse::success(task),

        Err(GetSingleTaskError::NotFound) => {
            ApiResponse::not_found("TASK_NOT_FOUND", "Task not found")
        }

        Err(GetSingleTaskError::QueryFailed(msg)) => {
            error!(task_id, error = %msg, "Failed to fetch task");
            ApiResponse::database_error(&msg)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::task::application::ports::incoming::use_cases::GetSingleTaskUseCase;
    use crate::shared::api::custom_path_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::fixtures::task_view;

    #[derive(Clone)]
    struct MockGetSingleTaskUseCase {
        result: Result<TaskView, GetSingleTaskError>,
    }

    #[async_trait]
    impl GetSingleTaskUseCase for MockGetSingleTaskUseCase {
        async fn execute(&self, _task_id: i32) -> Result<TaskView, GetSingleTaskError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_get_single_task_success() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_task(MockGetSingleTaskUseCase {
                result: Ok(task_view(3)),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_task_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/task/3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 3);
        assert_eq!(body["data"]["status"], "pending");
        assert_eq!(body["data"]["due_date"], "2025-03-31");
    }

    #[actix_web::test]
    async fn test_get_single_task_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_get_single_task(MockGetSingleTaskUseCase {
                result: Err(GetSingleTaskError::NotFound),
            })
            .build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(get_single_task_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/task/3").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "TASK_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_get_single_task_non_numeric_id() {
        let app_state = TestAppStateBuilder::default().build();
        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_path_config())
                .service(get_single_task_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/task/abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
