use async_trait::async_trait;

/// Rendered export ready to be sent as a download.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportFile {
    pub filename: String,
    pub content: Vec<u8>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ExportWorkbookError {
    #[error("Failed to load {entity}: {message}")]
    QueryFailed {
        entity: &'static str,
        message: String,
    },

    #[error("Failed to write workbook: {0}")]
    WriteFailed(String),
}

#[async_trait]
pub trait ExportWorkbookUseCase: Send + Sync {
    async fn execute(&self) -> Result<ExportFile, ExportWorkbookError>;
}
