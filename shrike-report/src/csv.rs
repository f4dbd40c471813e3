//! CSV emitter: one row per post in the window

use std::io::Write;
use std::path::Path;

use shrike_core::AnalysisResult;

use crate::ReportError;

/// Write the post table to any writer. Header is `Date,Likes,Comments`;
/// dates are `YYYY-MM-DD`.
pub fn write_posts<W: Write>(result: &AnalysisResult, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(["Date", "Likes", "Comments"])?;
    for row in &result.post_rows {
        csv_writer.write_record([
            row.date.format("%Y-%m-%d").to_string(),
            row.likes.to_string(),
            row.comments.to_string(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the post table to a file, overwriting any existing one
pub fn emit(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_posts(result, file)
}
