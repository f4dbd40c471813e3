//! Console emitter: the investigator-facing terminal report

use std::fmt::Write;

use shrike_core::AnalysisResult;

/// Hashtags shown in the console summary
const MAX_HASHTAGS_SHOWN: usize = 5;

/// Render the full console report. Kept separate from printing so tests can
/// assert on the text.
pub fn render(result: &AnalysisResult) -> String {
    let snapshot = &result.snapshot;
    let mut out = String::new();

    let _ = writeln!(out, "========== PROFILE INFO ==========");
    let _ = writeln!(out, "Username   : {}", snapshot.username);
    let _ = writeln!(out, "Name       : {}", snapshot.full_name);
    let _ = writeln!(out, "Followers  : {}", snapshot.follower_count);
    let _ = writeln!(out, "Following  : {}", snapshot.following_count);
    let _ = writeln!(out, "Posts      : {}", snapshot.post_count);
    let _ = writeln!(out, "F/F Ratio  : {}", result.follower_following_ratio);

    let _ = writeln!(out);
    let _ = writeln!(out, "========== ANALYSIS ==========");
    let _ = writeln!(out, "Engagement Ratio : {}%", result.engagement_ratio);
    let _ = writeln!(out, "Scam Risk Score  : {}/10", result.scam_risk_score);
    if let Some(days) = result.account_age_days {
        let _ = writeln!(out, "Account Age      : {} days (approx)", days);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Emails Found:");
    for email in &result.signals.emails {
        let _ = writeln!(out, "  {}", email);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Phone Numbers:");
    for number in result.signals.all_phone_numbers() {
        let _ = writeln!(out, "  {}", number);
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Top Hashtags:");
    for tag in result.signals.hashtags.iter().take(MAX_HASHTAGS_SHOWN) {
        let _ = writeln!(out, "  #{}", tag);
    }

    if !result.signals.inferred_locations.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Inferred Locations:");
        for location in &result.signals.inferred_locations {
            let _ = writeln!(out, "  {}", location);
        }
    }

    if !result.candidates.gmail_candidates.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Gmail Candidates (unverified):");
        for candidate in &result.candidates.gmail_candidates {
            let _ = writeln!(out, "  {}", candidate);
        }
    }

    if !result.candidates.footprint.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Username Footprint:");
        for (platform, url) in &result.candidates.footprint {
            let _ = writeln!(out, "  {:<10} {}", platform, url);
        }
    }

    out
}

/// Print the report to stdout
pub fn emit(result: &AnalysisResult) {
    print!("{}", render(result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use shrike_core::{
        analyze, PostSample, ProfileSnapshot, ScoringPolicy,
    };
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn result() -> AnalysisResult {
        let snapshot = ProfileSnapshot {
            username: "someuser".to_string(),
            full_name: "Some User".to_string(),
            biography: "contact deals@example.com or wa.me/919876543210".to_string(),
            follower_count: 1000,
            following_count: 200,
            post_count: 12,
            is_private: false,
            has_profile_picture: true,
        };
        let posts = vec![PostSample {
            published_at: Utc::now(),
            caption: "#promo #sale call 9876543210".to_string(),
            like_count: 10,
            comment_count: 3,
        }];
        analyze(snapshot, posts, BTreeMap::new(), ScoringPolicy::default())
    }

    #[test]
    fn test_render_contains_profile_sections() {
        let text = render(&result());
        assert!(text.contains("PROFILE INFO"));
        assert!(text.contains("Username   : someuser"));
        assert!(text.contains("Engagement Ratio : 1%"));
        assert!(text.contains("Scam Risk Score  : 0/10"));
    }

    #[test]
    fn test_render_unions_phone_sources() {
        let text = render(&result());
        assert!(text.contains("9876543210"));
        assert!(text.contains("919876543210"));
    }

    #[test]
    fn test_render_emails_verbatim() {
        let text = render(&result());
        assert!(text.contains("deals@example.com"));
    }

    #[test]
    fn test_render_caps_hashtags_at_five() {
        let snapshot = ProfileSnapshot {
            username: "u".to_string(),
            full_name: String::new(),
            biography: "#a #b #c #d #e #f #g".to_string(),
            follower_count: 10,
            following_count: 10,
            post_count: 10,
            is_private: false,
            has_profile_picture: true,
        };
        let analyzed = analyze(snapshot, Vec::new(), BTreeMap::new(), ScoringPolicy::default());
        let text = render(&analyzed);
        let shown = text.lines().filter(|l| l.trim_start().starts_with('#')).count();
        assert_eq!(shown, 5);
    }
}
