pub mod domain;
pub mod ports;
pub mod service;
mod task_use_cases;

pub use task_use_cases::TaskUseCases;
