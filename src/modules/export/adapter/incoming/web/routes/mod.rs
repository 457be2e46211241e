mod export_excel;

pub use export_excel::*;
