use chrono::{NaiveDate, TimeZone, Utc};

use crate::modules::project::application::ports::outgoing::{
    ProjectDetailView, ProjectListItem, ProjectResult,
};
use crate::modules::task::application::domain::entities::{TaskPriority, TaskStatus};
use crate::modules::task::application::domain::progress::TaskStatsView;
use crate::modules::task::application::ports::outgoing::TaskView;
use crate::modules::user::application::domain::entities::UserRole;
use crate::modules::user::application::ports::outgoing::{
    UserDetailView, UserListItem, UserResult, UserTaskItem,
};

fn fixed_time() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 15, 9, 30, 0).unwrap()
}

// ──────────────────────────────────────────────────────────
// Tasks
// ──────────────────────────────────────────────────────────

pub fn task_view(id: i32) -> TaskView {
    TaskView {
        id,
        project_id: 1,
        name: format!("Task {id}"),
        description: "Write the migration".to_string(),
        assigned_to: Some(1),
        status: TaskStatus::Pending,
        priority: TaskPriority::Medium,
        due_date: NaiveDate::from_ymd_opt(2025, 3, 31),
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

// ──────────────────────────────────────────────────────────
// Users
// ──────────────────────────────────────────────────────────

pub fn user_result(id: i32) -> UserResult {
    UserResult {
        id,
        full_name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: UserRole::Worker,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn user_list_item(id: i32) -> UserListItem {
    UserListItem {
        id,
        full_name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: UserRole::Worker,
        created_at: fixed_time(),
        task_stats: TaskStatsView::default(),
    }
}

pub fn user_detail_view(id: i32) -> UserDetailView {
    let task = task_view(1);

    UserDetailView {
        id,
        full_name: format!("User {id}"),
        email: format!("user{id}@example.com"),
        role: UserRole::Worker,
        created_at: fixed_time(),
        updated_at: fixed_time(),
        task_stats: TaskStatsView {
            total_tasks: 1,
            pending_tasks: 1,
            in_progress_tasks: 0,
            completed_tasks: 0,
            progress: 0.0,
        },
        tasks: vec![UserTaskItem {
            id: task.id,
            project_id: task.project_id,
            name: task.name,
            description: task.description,
            status: task.status,
            priority: task.priority,
            due_date: task.due_date,
            created_at: task.created_at,
        }],
    }
}

// ──────────────────────────────────────────────────────────
// Projects
// ──────────────────────────────────────────────────────────

pub fn project_result(id: i32) -> ProjectResult {
    ProjectResult {
        id,
        name: format!("Project {id}"),
        description: String::new(),
        owner_id: 1,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn project_list_item(id: i32) -> ProjectListItem {
    ProjectListItem {
        id,
        name: format!("Project {id}"),
        description: String::new(),
        owner_id: 1,
        created_at: fixed_time(),
        task_stats: TaskStatsView::default(),
    }
}

pub fn project_detail_view(id: i32) -> ProjectDetailView {
    ProjectDetailView {
        id,
        name: format!("Project {id}"),
        description: String::new(),
        owner_id: 1,
        created_at: fixed_time(),
        updated_at: fixed_time(),
        task_stats: TaskStatsView::default(),
    }
}
