use actix_web::web;
use std::sync::Arc;

use crate::modules::export::application::ports::incoming::use_cases::ExportWorkbookUseCase;
use crate::modules::export::application::ExportUseCases;
use crate::modules::project::application::ports::incoming::use_cases::{
    CreateProjectUseCase, DeleteProjectUseCase, GetProjectsUseCase, GetSingleProjectUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::ProjectUseCases;
use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskUseCase, DeleteTaskUseCase, GetSingleTaskUseCase, GetTasksUseCase,
    UpdateTaskUseCase,
};
use crate::modules::task::application::TaskUseCases;
use crate::modules::user::application::ports::incoming::use_cases::{
    CreateUserUseCase, DeleteUserUseCase, GetSingleUserUseCase, GetUsersUseCase,
    UpdateUserUseCase,
};
use crate::modules::user::application::UserUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` of stubs; route tests swap in the one use case they exercise.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    project: ProjectUseCases,
    task: TaskUseCases,
    export: ExportUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                create: Arc::new(StubCreateUserUseCase),
                get_list: Arc::new(StubGetUsersUseCase),
                get_single: Arc::new(StubGetSingleUserUseCase),
                update: Arc::new(StubUpdateUserUseCase),
                delete: Arc::new(StubDeleteUserUseCase),
            },
            project: ProjectUseCases {
                create: Arc::new(StubCreateProjectUseCase),
                get_list: Arc::new(StubGetProjectsUseCase),
                get_single: Arc::new(StubGetSingleProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
            },
            task: TaskUseCases {
                create: Arc::new(StubCreateTaskUseCase),
                get_list: Arc::new(StubGetTasksUseCase),
                get_single: Arc::new(StubGetSingleTaskUseCase),
                update: Arc::new(StubUpdateTaskUseCase),
                delete: Arc::new(StubDeleteTaskUseCase),
            },
            export: ExportUseCases {
                excel: Arc::new(StubExportWorkbookUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Users

    pub fn with_create_user(mut self, uc: impl CreateUserUseCase + 'static) -> Self {
        self.user.create = Arc::new(uc);
        self
    }

    pub fn with_get_users(mut self, uc: impl GetUsersUseCase + 'static) -> Self {
        self.user.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_user(mut self, uc: impl GetSingleUserUseCase + 'static) -> Self {
        self.user.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_user(mut self, uc: impl UpdateUserUseCase + 'static) -> Self {
        self.user.update = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    // Projects

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_project(
        mut self,
        uc: impl GetSingleProjectUseCase + 'static,
    ) -> Self {
        self.project.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    // Tasks

    pub fn with_create_task(mut self, uc: impl CreateTaskUseCase + 'static) -> Self {
        self.task.create = Arc::new(uc);
        self
    }

    pub fn with_get_tasks(mut self, uc: impl GetTasksUseCase + 'static) -> Self {
        self.task.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_single_task(mut self, uc: impl GetSingleTaskUseCase + 'static) -> Self {
        self.task.get_single = Arc::new(uc);
        self
    }

    pub fn with_update_task(mut self, uc: impl UpdateTaskUseCase + 'static) -> Self {
        self.task.update = Arc::new(uc);
        self
    }

    pub fn with_delete_task(mut self, uc: impl DeleteTaskUseCase + 'static) -> Self {
        self.task.delete = Arc::new(uc);
        self
    }

    // Export

    pub fn with_export_excel(mut self, uc: impl ExportWorkbookUseCase + 'static) -> Self {
        self.export.excel = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            project: self.project,
            task: self.task,
            export: self.export,
        })
    }
}
