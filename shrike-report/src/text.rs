//! Plain-text summary emitter

use std::fmt::Write;
use std::path::Path;

use shrike_core::AnalysisResult;

use crate::ReportError;

/// Render the plain-text summary: profile counts, the two scores, then one
/// email per line.
pub fn render(result: &AnalysisResult) -> String {
    let snapshot = &result.snapshot;
    let mut out = String::new();

    let _ = writeln!(out, "Username: {}", snapshot.username);
    let _ = writeln!(out, "Followers: {}", snapshot.follower_count);
    let _ = writeln!(out, "Following: {}", snapshot.following_count);
    let _ = writeln!(out, "Engagement Ratio: {}%", result.engagement_ratio);
    let _ = writeln!(out, "Scam Risk Score: {}/10", result.scam_risk_score);
    let _ = writeln!(out);
    let _ = writeln!(out, "Emails:");
    for email in &result.signals.emails {
        let _ = writeln!(out, "{}", email);
    }

    out
}

/// Write the summary to a file, overwriting any existing one
pub fn emit(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, render(result))?;
    Ok(())
}
