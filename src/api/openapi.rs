use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::project::adapter::incoming::web::routes::{
    CreateProjectRequest, UpdateProjectRequest,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectDetailView, ProjectListItem, ProjectResult,
};
use crate::modules::task::adapter::incoming::web::routes::{CreateTaskRequest, UpdateTaskRequest};
use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::modules::task::application::ports::outgoing::{TaskListResult, TaskView};
use crate::modules::user::adapter::incoming::web::routes::{CreateUserRequest, UpdateUserRequest};
use crate::modules::user::application::domain::entities::UserRole;
use crate::modules::user::application::ports::outgoing::{
    UserDetailView, UserListItem, UserResult, UserTaskItem,
};
use crate::time::TimeInfo;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task Management API",
        version = "1.0.0",
        description = "Users, projects and tasks with progress statistics and xlsx export"
    ),
    paths(
        // User endpoints
        crate::modules::user::adapter::incoming::web::routes::get_users_handler,
        crate::modules::user::adapter::incoming::web::routes::get_single_user_handler,
        crate::modules::user::adapter::incoming::web::routes::create_user_handler,
        crate::modules::user::adapter::incoming::web::routes::update_user_handler,
        crate::modules::user::adapter::incoming::web::routes::delete_user_handler,

        // Project endpoints
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_single_project_handler,
        crate::modules::project::adapter::incoming::web::routes::create_project_handler,
        crate::modules::project::adapter::incoming::web::routes::update_project_handler,
        crate::modules::project::adapter::incoming::web::routes::delete_project_handler,

        // Task endpoints
        crate::modules::task::adapter::incoming::web::routes::get_tasks_handler,
        crate::modules::task::adapter::incoming::web::routes::get_single_task_handler,
        crate::modules::task::adapter::incoming::web::routes::create_task_handler,
        crate::modules::task::adapter::incoming::web::routes::update_task_handler,
        crate::modules::task::adapter::incoming::web::routes::delete_task_handler,

        // Export
        crate::modules::export::adapter::incoming::web::routes::export_excel_handler,

        // Time
        crate::time::time_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,

            // User DTOs
            CreateUserRequest,
            UpdateUserRequest,
            UserRole,
            UserResult,
            UserListItem,
            UserDetailView,
            UserTaskItem,

            // Project DTOs
            CreateProjectRequest,
            UpdateProjectRequest,
            ProjectResult,
            ProjectListItem,
            ProjectDetailView,

            // Task DTOs
            CreateTaskRequest,
            UpdateTaskRequest,
            TaskStatus,
            TaskPriority,
            TaskView,
            TaskListResult,
            TaskStatsView,

            TimeInfo
        )
    ),
    tags(
        (name = "users", description = "User management endpoints"),
        (name = "projects", description = "Project management endpoints"),
        (name = "tasks", description = "Task management endpoints"),
        (name = "export", description = "Spreadsheet export"),
        (name = "time", description = "Server clock diagnostics"),
    )
)]
pub struct ApiDoc;
