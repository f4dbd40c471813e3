//! Spreadsheet emitter: same table as the CSV, as an XLSX workbook

use std::path::Path;

use rust_xlsxwriter::Workbook;

use shrike_core::AnalysisResult;

use crate::ReportError;

/// Write the post table to an XLSX file, overwriting any existing one.
/// First row is the `Date,Likes,Comments` header, then one row per post.
pub fn emit(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Date")?;
    worksheet.write_string(0, 1, "Likes")?;
    worksheet.write_string(0, 2, "Comments")?;

    for (index, row) in result.post_rows.iter().enumerate() {
        let row_num = (index + 1) as u32;
        worksheet.write_string(row_num, 0, row.date.format("%Y-%m-%d").to_string())?;
        worksheet.write_number(row_num, 1, row.likes as f64)?;
        worksheet.write_number(row_num, 2, row.comments as f64)?;
    }

    workbook.save(path)?;
    Ok(())
}
