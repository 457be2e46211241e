// src/modules/export/application/ports/outgoing/workbook_writer.rs

use crate::modules::export::application::domain::workbook::Workbook;

#[derive(Debug, Clone, thiserror::Error)]
pub enum WorkbookWriteError {
    #[error("Workbook write failed: {0}")]
    WriteFailed(String),
}

/// Renders a workbook model to file bytes.
pub trait WorkbookWriter: Send + Sync {
    fn write(&self, workbook: &Workbook) -> Result<Vec<u8>, WorkbookWriteError>;
}
