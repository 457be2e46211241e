// src/modules/export/adapter/outgoing/xlsx_workbook_writer.rs

use rust_xlsxwriter::{Color, Format, Workbook as XlsxWorkbook, Worksheet, XlsxError};

use crate::modules::export::application::domain::workbook::{Cell, CellValue, Sheet, Workbook};
use crate::modules::export::application::ports::outgoing::{WorkbookWriteError, WorkbookWriter};

#[derive(Clone, Default)]
pub struct XlsxWorkbookWriter;

impl XlsxWorkbookWriter {
    pub fn new() -> Self {
        Self
    }
}

impl WorkbookWriter for XlsxWorkbookWriter {
    fn write(&self, workbook: &Workbook) -> Result<Vec<u8>, WorkbookWriteError> {
        let mut xlsx = XlsxWorkbook::new();
        let header = Format::new().set_bold();

        for sheet in &workbook.sheets {
            let worksheet = xlsx.add_worksheet();
            render_sheet(worksheet, sheet, &header).map_err(map_xlsx_err)?;
        }

        xlsx.save_to_buffer().map_err(map_xlsx_err)
    }
}

fn render_sheet(worksheet: &mut Worksheet, sheet: &Sheet, header: &Format) -> Result<(), XlsxError> {
    worksheet.set_name(&sheet.name)?;

    for (col, title) in sheet.headers.iter().enumerate() {
        worksheet.write_string_with_format(0, column(col)?, title, header)?;
    }

    for (i, cells) in sheet.rows.iter().enumerate() {
        let row = u32::try_from(i + 1).map_err(|_| XlsxError::RowColumnLimitError)?;
        for (col, cell) in cells.iter().enumerate() {
            write_cell(worksheet, row, column(col)?, cell)?;
        }
    }

    worksheet.autofit();
    Ok(())
}

fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, cell: &Cell) -> Result<(), XlsxError> {
    let mut format = Format::new();
    if let Some(fill) = cell.fill {
        format = format.set_background_color(Color::RGB(fill.rgb()));
    }

    match &cell.value {
        CellValue::Number(n) => {
            worksheet.write_number_with_format(row, col, *n, &format)?;
        }
        CellValue::Text(s) => {
            worksheet.write_string_with_format(row, col, s, &format)?;
        }
        CellValue::Empty => {
            if cell.fill.is_some() {
                worksheet.write_blank(row, col, &format)?;
            }
        }
    }

    Ok(())
}

fn column(index: usize) -> Result<u16, XlsxError> {
    u16::try_from(index).map_err(|_| XlsxError::RowColumnLimitError)
}

fn map_xlsx_err(e: XlsxError) -> WorkbookWriteError {
    WorkbookWriteError::WriteFailed(e.to_string())
}
