//! Default use cases for `TestAppStateBuilder`. Each one answers with an
//! empty result or an error so a route test only wires what it exercises.

use async_trait::async_trait;

use crate::modules::export::application::ports::incoming::use_cases::{
    ExportFile, ExportWorkbookError, ExportWorkbookUseCase,
};
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectCommand, CreateProjectError, CreateProjectUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectsError, GetProjectsUseCase, GetSingleProjectError,
    GetSingleProjectUseCase, UpdateProjectCommand, UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::{
    ProjectDetailView, ProjectListFilter, ProjectListItem, ProjectResult,
};
use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskCommand, CreateTaskError, CreateTaskUseCase, DeleteTaskError, DeleteTaskUseCase,
    GetSingleTaskError, GetSingleTaskUseCase, GetTasksError, GetTasksUseCase, UpdateTaskCommand,
    UpdateTaskError, UpdateTaskUseCase,
};
use crate::modules::task::application::ports::outgoing::{TaskListFilter, TaskListResult, TaskView};
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserCommand, CreateUserError, CreateUserUseCase, DeleteUserError, DeleteUserUseCase,
    GetSingleUserError, GetSingleUserUseCase, GetUsersError, GetUsersUseCase, UpdateUserCommand,
    UpdateUserError, UpdateUserUseCase,
};
use crate::modules::user::application::ports::outgoing::{
    UserDetailView, UserListItem, UserResult,
};
use crate::shared::pagination::{ListResult, PageRequest};

const NOT_USED: &str = "not used in this test";

fn empty_list<T>() -> ListResult<T> {
    ListResult {
        items: Vec::new(),
        count: 0,
    }
}

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

pub struct StubCreateUserUseCase;

#[async_trait]
impl CreateUserUseCase for StubCreateUserUseCase {
    async fn execute(&self, _command: CreateUserCommand) -> Result<UserResult, CreateUserError> {
        Err(CreateUserError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetUsersUseCase;

#[async_trait]
impl GetUsersUseCase for StubGetUsersUseCase {
    async fn execute(&self, _page: PageRequest) -> Result<ListResult<UserListItem>, GetUsersError> {
        Ok(empty_list())
    }
}

pub struct StubGetSingleUserUseCase;

#[async_trait]
impl GetSingleUserUseCase for StubGetSingleUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<UserDetailView, GetSingleUserError> {
        Err(GetSingleUserError::NotFound)
    }
}

pub struct StubUpdateUserUseCase;

#[async_trait]
impl UpdateUserUseCase for StubUpdateUserUseCase {
    async fn execute(
        &self,
        _user_id: i32,
        _command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError> {
        Err(UpdateUserError::NotFound)
    }
}

pub struct StubDeleteUserUseCase;

#[async_trait]
impl DeleteUserUseCase for StubDeleteUserUseCase {
    async fn execute(&self, _user_id: i32) -> Result<(), DeleteUserError> {
        Err(DeleteUserError::NotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(
        &self,
        _command: CreateProjectCommand,
    ) -> Result<ProjectResult, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        _page: PageRequest,
    ) -> Result<ListResult<ProjectListItem>, GetProjectsError> {
        Ok(empty_list())
    }
}

pub struct StubGetSingleProjectUseCase;

#[async_trait]
impl GetSingleProjectUseCase for StubGetSingleProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<ProjectDetailView, GetSingleProjectError> {
        Err(GetSingleProjectError::NotFound)
    }
}

pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: i32,
        _command: UpdateProjectCommand,
    ) -> Result<ProjectResult, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Tasks
// ──────────────────────────────────────────────────────────

pub struct StubCreateTaskUseCase;

#[async_trait]
impl CreateTaskUseCase for StubCreateTaskUseCase {
    async fn execute(&self, _command: CreateTaskCommand) -> Result<TaskView, CreateTaskError> {
        Err(CreateTaskError::RepositoryError(NOT_USED.to_string()))
    }
}

pub struct StubGetTasksUseCase;

#[async_trait]
impl GetTasksUseCase for StubGetTasksUseCase {
    async fn execute(
        &self,
        _filter: TaskListFilter,
        _page: PageRequest,
    ) -> Result<TaskListResult, GetTasksError> {
        Ok(TaskListResult {
            items: Vec::new(),
            count: 0,
            task_stats: TaskStatsView::default(),
        })
    }
}

pub struct StubGetSingleTaskUseCase;

#[async_trait]
impl GetSingleTaskUseCase for StubGetSingleTaskUseCase {
    async fn execute(&self, _task_id: i32) -> Result<TaskView, GetSingleTaskError> {
        Err(GetSingleTaskError::NotFound)
    }
}

pub struct StubUpdateTaskUseCase;

#[async_trait]
impl UpdateTaskUseCase for StubUpdateTaskUseCase {
    async fn execute(
        &self,
        _task_id: i32,
        _command: UpdateTaskCommand,
    ) -> Result<TaskView, UpdateTaskError> {
        Err(UpdateTaskError::NotFound)
    }
}

pub struct StubDeleteTaskUseCase;

#[async_trait]
impl DeleteTaskUseCase for StubDeleteTaskUseCase {
    async fn execute(&self, _task_id: i32) -> Result<(), DeleteTaskError> {
        Err(DeleteTaskError::NotFound)
    }
}

// ──────────────────────────────────────────────────────────
// Export
// ──────────────────────────────────────────────────────────

pub struct StubExportWorkbookUseCase;

#[async_trait]
impl ExportWorkbookUseCase for StubExportWorkbookUseCase {
    async fn execute(&self) -> Result<ExportFile, ExportWorkbookError> {
        Err(ExportWorkbookError::WriteFailed(NOT_USED.to_string()))
    }
}
