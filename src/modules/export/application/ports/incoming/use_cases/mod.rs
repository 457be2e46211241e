mod export_workbook;

pub use export_workbook::{ExportFile, ExportWorkbookError, ExportWorkbookUseCase};
