pub mod ports;
pub mod service;
mod project_use_cases;

pub use project_use_cases::ProjectUseCases;
