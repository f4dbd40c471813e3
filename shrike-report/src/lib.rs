//! Report emitters for Shrike analysis results
//!
//! Every emitter takes one `&AnalysisResult` and writes one channel:
//! console text, CSV, XLSX spreadsheet, paginated PDF, or plain-text
//! summary. Emitters are independent of each other and never mutate the
//! result; export is best-effort per format.

pub mod console;
pub mod csv;
pub mod pdf;
pub mod sheet;
pub mod text;

use thiserror::Error;

/// Errors from report emission
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Write failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Spreadsheet write failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("PDF write failed: {0}")]
    Pdf(#[from] printpdf::Error),
}

/// `{username}_posts.csv`
pub fn posts_csv_name(username: &str) -> String {
    format!("{username}_posts.csv")
}

/// `{username}_posts.xlsx`
pub fn posts_xlsx_name(username: &str) -> String {
    format!("{username}_posts.xlsx")
}

/// `{username}_report.txt`
pub fn report_txt_name(username: &str) -> String {
    format!("{username}_report.txt")
}

/// `{username}_OSINT_Report.pdf`
pub fn report_pdf_name(username: &str) -> String {
    format!("{username}_OSINT_Report.pdf")
}
