//! Paginated PDF document emitter
//!
//! A title line followed by one `Key: Value` line per field in fixed order.
//! The vertical cursor is tracked in mm from the page bottom; once it
//! crosses the bottom margin a fresh page is started and the cursor resets
//! to the top margin.

use std::path::Path;

use printpdf::{
    BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfDocumentReference, PdfLayerReference,
};

use shrike_core::AnalysisResult;

use crate::ReportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const LEFT_MARGIN_MM: f32 = 20.0;
const TOP_MARGIN_MM: f32 = 277.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const LINE_STEP_MM: f32 = 9.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 12.0;

/// Write the document to a file, overwriting any existing one
pub fn emit(result: &AnalysisResult, path: &Path) -> Result<(), ReportError> {
    let (doc, page, layer) = PdfDocument::new(
        "OSINT Profile Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let body_font = doc.add_builtin_font(BuiltinFont::Helvetica)?;
    let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold)?;

    let mut cursor = PageCursor {
        doc: &doc,
        layer: doc.get_page(page).get_layer(layer),
        y_mm: TOP_MARGIN_MM,
    };

    cursor.line(
        &title_font,
        TITLE_SIZE,
        &format!("OSINT Report: {}", result.snapshot.username),
    );
    for (key, value) in field_lines(result) {
        cursor.line(&body_font, BODY_SIZE, &format!("{key}: {value}"));
    }

    let bytes = doc.save_to_bytes()?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// The document body in its fixed key order
fn field_lines(result: &AnalysisResult) -> Vec<(&'static str, String)> {
    let snapshot = &result.snapshot;
    vec![
        ("Username", snapshot.username.clone()),
        ("Full Name", snapshot.full_name.clone()),
        ("Followers", snapshot.follower_count.to_string()),
        ("Following", snapshot.following_count.to_string()),
        ("Posts", snapshot.post_count.to_string()),
        ("Engagement Ratio", format!("{}%", result.engagement_ratio)),
        ("Scam Risk Score", format!("{}/10", result.scam_risk_score)),
        ("Emails Found", join_or_none(result.signals.emails.iter())),
        (
            "Phone Numbers",
            join_or_none(result.signals.all_phone_numbers().iter()),
        ),
        (
            "Locations",
            join_or_none(result.signals.inferred_locations.iter()),
        ),
    ]
}

fn join_or_none<'a>(items: impl Iterator<Item = &'a String>) -> String {
    let joined = items.map(String::as_str).collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "none".to_string()
    } else {
        joined
    }
}

fn needs_page_break(y_mm: f32) -> bool {
    y_mm < BOTTOM_MARGIN_MM
}

/// Write cursor over the current page; breaks to a new page when the next
/// line would land below the bottom margin.
struct PageCursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    y_mm: f32,
}

impl PageCursor<'_> {
    fn line(&mut self, font: &IndirectFontRef, size: f32, text: &str) {
        if needs_page_break(self.y_mm) {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y_mm = TOP_MARGIN_MM;
        }
        self.layer
            .use_text(text, size, Mm(LEFT_MARGIN_MM), Mm(self.y_mm), font);
        self.y_mm -= LINE_STEP_MM;
    }
}
