mod create_task_service;
mod delete_task_service;
mod get_single_task_service;
mod get_tasks_service;
mod update_task_service;

pub use create_task_service::CreateTaskService;
pub use delete_task_service::DeleteTaskService;
pub use get_single_task_service::GetSingleTaskService;
pub use get_tasks_service::GetTasksService;
pub use update_task_service::UpdateTaskService;
