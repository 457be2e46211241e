mod export_workbook_service;

pub use export_workbook_service::{build_workbook, export_filename, ExportWorkbookService};
