mod create_task;
mod delete_task;
mod get_single_task;
mod get_tasks;
mod update_task;

pub use create_task::*;
pub use delete_task::*;
pub use get_single_task::*;
pub use get_tasks::*;
pub use update_task::*;
