// src/modules/export/application/service/export_workbook_service.rs

use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};
use std::collections::HashMap;
use tracing::info;

use crate::modules::export::application::domain::workbook::{Cell, CellFill, Sheet, Workbook};
use crate::modules::export::application::ports::incoming::use_cases::{
    ExportFile, ExportWorkbookError, ExportWorkbookUseCase,
};
use crate::modules::export::application::ports::outgoing::WorkbookWriter;
use crate::modules::project::application::ports::outgoing::{
    ProjectListFilter, ProjectListItem, ProjectQuery,
};
use crate::modules::task::application::domain::entities::{TaskStatus, DUE_DATE_FORMAT};
use crate::modules::task::application::ports::outgoing::{TaskListFilter, TaskQuery, TaskView};
use crate::modules::user::application::ports::outgoing::{UserListItem, UserQuery};
use crate::shared::pagination::PageRequest;

const NOT_ASSIGNED: &str = "Not assigned";

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct ExportWorkbookService<U, P, T, W>
where
    U: UserQuery,
    P: ProjectQuery,
    T: TaskQuery,
    W: WorkbookWriter,
{
    user_query: U,
    project_query: P,
    task_query: T,
    writer: W,
}

impl<U, P, T, W> ExportWorkbookService<U, P, T, W>
where
    U: UserQuery,
    P: ProjectQuery,
    T: TaskQuery,
    W: WorkbookWriter,
{
    pub fn new(user_query: U, project_query: P, task_query: T, writer: W) -> Self {
        Self {
            user_query,
            project_query,
            task_query,
            writer,
        }
    }
}

#[async_trait]
impl<U, P, T, W> ExportWorkbookUseCase for ExportWorkbookService<U, P, T, W>
where
    U: UserQuery + Send + Sync,
    P: ProjectQuery + Send + Sync,
    T: TaskQuery + Send + Sync,
    W: WorkbookWriter + Send + Sync,
{
    async fn execute(&self) -> Result<ExportFile, ExportWorkbookError> {
        let users = self
            .user_query
            .list(PageRequest::unbounded())
            .await
            .map_err(|e| query_failed("users", e))?
            .items;

        let projects = self
            .project_query
            .list(ProjectListFilter::default(), PageRequest::unbounded())
            .await
            .map_err(|e| query_failed("projects", e))?
            .items;

        let tasks = self
            .task_query
            .list(TaskListFilter::default(), PageRequest::unbounded())
            .await
            .map_err(|e| query_failed("tasks", e))?
            .items;

        let workbook = build_workbook(&users, &projects, &tasks);

        let content = self
            .writer
            .write(&workbook)
            .map_err(|e| ExportWorkbookError::WriteFailed(e.to_string()))?;

        info!(
            users = users.len(),
            projects = projects.len(),
            tasks = tasks.len(),
            bytes = content.len(),
            "Workbook exported"
        );

        Ok(ExportFile {
            filename: export_filename(&Local::now()),
            content,
        })
    }
}

fn query_failed(entity: &'static str, err: impl std::fmt::Display) -> ExportWorkbookError {
    ExportWorkbookError::QueryFailed {
        entity,
        message: err.to_string(),
    }
}

pub fn export_filename<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!(
        "task_management_export_{}.xlsx",
        now.format("%Y-%m-%d_%H-%M-%S")
    )
}

//
// ──────────────────────────────────────────────────────────
// Sheet building
// ──────────────────────────────────────────────────────────
//

/// Users, Tasks, Projects, in that order.
pub fn build_workbook(
    users: &[UserListItem],
    projects: &[ProjectListItem],
    tasks: &[TaskView],
) -> Workbook {
    Workbook {
        sheets: vec![
            users_sheet(users),
            tasks_sheet(tasks, users, projects),
            projects_sheet(projects),
        ],
    }
}

fn users_sheet(users: &[UserListItem]) -> Sheet {
    let mut sheet = Sheet::new(
        "Users",
        &[
            "ID",
            "Full Name",
            "Email",
            "Role",
            "Pending Tasks",
            "In Progress Tasks",
            "Completed Tasks",
            "Total Tasks",
        ],
    );

    for user in users {
        let stats = &user.task_stats;
        sheet.rows.push(vec![
            Cell::integer(user.id.into()),
            Cell::text(&user.full_name),
            Cell::text(&user.email),
            Cell::text(user.role.as_str()),
            Cell::integer(stats.pending_tasks),
            Cell::integer(stats.in_progress_tasks),
            Cell::integer(stats.completed_tasks),
            Cell::integer(stats.pending_tasks + stats.in_progress_tasks + stats.completed_tasks),
        ]);
    }

    sheet
}

fn tasks_sheet(tasks: &[TaskView], users: &[UserListItem], projects: &[ProjectListItem]) -> Sheet {
    let user_names: HashMap<i32, &str> = users
        .iter()
        .map(|u| (u.id, u.full_name.as_str()))
        .collect();
    let project_names: HashMap<i32, &str> = projects
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();

    let mut sheet = Sheet::new(
        "Tasks",
        &[
            "ID",
            "Name",
            "Description",
            "Project",
            "Status",
            "Priority",
            "Due Date",
            "Assigned To",
        ],
    );

    for task in tasks {
        let project = match project_names.get(&task.project_id) {
            Some(name) => Cell::text(*name),
            None => Cell::integer(task.project_id.into()),
        };

        let assignee = task
            .assigned_to
            .and_then(|id| user_names.get(&id).copied())
            .filter(|name| !name.is_empty())
            .unwrap_or(NOT_ASSIGNED);

        let due_date = match task.due_date {
            Some(date) => Cell::text(date.format(DUE_DATE_FORMAT).to_string()),
            None => Cell::empty(),
        };

        sheet.rows.push(vec![
            Cell::integer(task.id.into()),
            Cell::text(&task.name),
            Cell::text(&task.description),
            project,
            Cell::text(task.status.label()).with_fill(status_fill(task.status)),
            Cell::text(task.priority.as_str()),
            due_date,
            Cell::text(assignee),
        ]);
    }

    sheet
}

fn projects_sheet(projects: &[ProjectListItem]) -> Sheet {
    let mut sheet = Sheet::new(
        "Projects",
        &[
            "ID",
            "Name",
            "Description",
            "Owner ID",
            "Total Tasks",
            "Progress",
        ],
    );

    for project in projects {
        sheet.rows.push(vec![
            Cell::integer(project.id.into()),
            Cell::text(&project.name),
            Cell::text(&project.description),
            Cell::integer(project.owner_id.into()),
            Cell::integer(project.task_stats.total_tasks),
            Cell::text(format!("{:.2}%", project.task_stats.progress)),
        ]);
    }

    sheet
}

fn status_fill(status: TaskStatus) -> CellFill {
    match status {
        TaskStatus::Pending => CellFill::Red,
        TaskStatus::InProgress => CellFill::Yellow,
        TaskStatus::Completed => CellFill::Green,
    }
}
