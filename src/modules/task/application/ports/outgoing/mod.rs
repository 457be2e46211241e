pub mod task_archiver;
pub mod task_query;
pub mod task_repository;

pub use task_archiver::{TaskArchiver, TaskArchiverError};
pub use task_query::{TaskListFilter, TaskListResult, TaskQuery, TaskQueryError, TaskView};
pub use task_repository::{CreateTaskData, PatchTaskData, TaskRepository, TaskRepositoryError};
