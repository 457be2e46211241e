use std::sync::Arc;

use crate::modules::export::application::ports::incoming::use_cases::ExportWorkbookUseCase;

#[derive(Clone)]
pub struct ExportUseCases {
    pub excel: Arc<dyn ExportWorkbookUseCase + Send + Sync>,
}
