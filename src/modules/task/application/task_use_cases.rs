use std::sync::Arc;

use crate::modules::task::application::ports::incoming::use_cases::{
    CreateTaskUseCase, DeleteTaskUseCase, GetSingleTaskUseCase, GetTasksUseCase,
    UpdateTaskUseCase,
};

#[derive(Clone)]
pub struct TaskUseCases {
    pub create: Arc<dyn CreateTaskUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetTasksUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetSingleTaskUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTaskUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTaskUseCase + Send + Sync>,
}
