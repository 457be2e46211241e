pub mod domain;
pub mod ports;
pub mod service;
mod export_use_cases;

pub use export_use_cases::ExportUseCases;
