mod xlsx_workbook_writer;

pub use xlsx_workbook_writer::XlsxWorkbookWriter;
