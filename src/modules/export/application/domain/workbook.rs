// src/modules/export/application/domain/workbook.rs

//! Format-neutral workbook model. The export service fills it, a
//! `WorkbookWriter` renders it.

/// Background fill categories used to mark task status cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFill {
    Red,
    Yellow,
    Green,
}

impl CellFill {
    /// RGB value as 0xRRGGBB.
    pub fn rgb(&self) -> u32 {
        match self {
            CellFill::Red => 0xFF9999,
            CellFill::Yellow => 0xFFEB9C,
            CellFill::Green => 0xC6EFCE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub fill: Option<CellFill>,
}

impl Cell {
    pub fn number(n: f64) -> Self {
        Self {
            value: CellValue::Number(n),
            fill: None,
        }
    }

    /// Ids and counts; spreadsheets store every number as f64.
    pub fn integer(n: i64) -> Self {
        Self::number(n as f64)
    }

    pub fn text(s: impl Into<String>) -> Self {
        Self {
            value: CellValue::Text(s.into()),
            fill: None,
        }
    }

    pub fn empty() -> Self {
        Self {
            value: CellValue::Empty,
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: CellFill) -> Self {
        self.fill = Some(fill);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    /// Rendered bold in the first row.
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: &str, headers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}
