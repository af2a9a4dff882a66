//! FILENAME: sheet-source/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XLSX read error: {0}")]
    XlsxRead(#[from] calamine::XlsxError),

    #[error("Workbook contains no sheets")]
    EmptyWorkbook,

    #[error("Invalid file format: {0}")]
    InvalidFormat(String),

    #[error("Required column missing from schedule sheet: {0}")]
    MissingColumn(String),
}
