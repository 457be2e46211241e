mod create_task;
mod delete_task;
mod get_single_task;
mod get_tasks;
mod update_task;

pub use create_task::{CreateTaskCommand, CreateTaskError, CreateTaskUseCase};
pub use delete_task::{DeleteTaskError, DeleteTaskUseCase};
pub use get_single_task::{GetSingleTaskError, GetSingleTaskUseCase};
pub use get_tasks::{GetTasksError, GetTasksUseCase};
pub use update_task::{UpdateTaskCommand, UpdateTaskError, UpdateTaskUseCase};
