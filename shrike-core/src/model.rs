//! Domain model for a profile triage scan
//!
//! Everything here is plain data: fetched once, analyzed once, then read by
//! every report emitter without mutation.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Public profile metadata, fetched once per scan.
///
/// Counts are non-negative by construction. When `is_private` is true no
/// post data is fetched and every post-derived signal stays empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub username: String,
    pub full_name: String,
    /// May be empty.
    pub biography: String,
    pub follower_count: u64,
    pub following_count: u64,
    pub post_count: u64,
    pub is_private: bool,
    pub has_profile_picture: bool,
}

/// One post out of the bounded recent-post window.
///
/// Posts arrive in fetch order (reverse-chronological) and are never
/// re-sorted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSample {
    pub published_at: DateTime<Utc>,
    /// May be empty.
    pub caption: String,
    pub like_count: u64,
    pub comment_count: u64,
}

/// Signals accumulated over the biography and the post window.
///
/// Membership-only sets; sorted containers keep report output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalSet {
    /// Raw hashtag bodies, case preserved.
    pub hashtags: BTreeSet<String>,
    pub emails: BTreeSet<String>,
    /// Numbers matched in free text.
    pub phone_numbers: BTreeSet<String>,
    /// Numbers embedded in messaging deep-links (wa.me, t.me). Kept apart
    /// from free-text numbers until report time: a reviewer auditing a hit
    /// needs to know it came from an explicit contact link.
    pub link_phone_numbers: BTreeSet<String>,
    /// Gazetteer matches, title-cased.
    pub inferred_locations: BTreeSet<String>,
}

impl SignalSet {
    /// Union of free-text and link-embedded numbers, for display only.
    pub fn all_phone_numbers(&self) -> BTreeSet<String> {
        self.phone_numbers
            .union(&self.link_phone_numbers)
            .cloned()
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.hashtags.is_empty()
            && self.emails.is_empty()
            && self.phone_numbers.is_empty()
            && self.link_phone_numbers.is_empty()
            && self.inferred_locations.is_empty()
    }
}

/// Identifiers the scan generated rather than extracted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CandidateSet {
    /// Sorted, deduplicated Gmail guesses. Plausible, never verified.
    pub gmail_candidates: Vec<String>,
    /// Platform name -> probed URL, only platforms that answered success.
    pub footprint: BTreeMap<String, String>,
}

/// One row of the tabular post export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRow {
    pub date: NaiveDate,
    pub likes: u64,
    pub comments: u64,
}

/// Output of one scan: constructed once by the aggregator, read-only
/// afterward, consumed independently by every emitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub snapshot: ProfileSnapshot,
    pub signals: SignalSet,
    pub candidates: CandidateSet,
    /// Average likes over the window as a percentage of followers, 2 decimals.
    pub engagement_ratio: f64,
    /// Ordinal 0-10 heuristic. Not a probability.
    pub scam_risk_score: u8,
    /// Followers / following, 2 decimals, 0 when following is 0.
    pub follower_following_ratio: f64,
    /// Days since the first post seen in the window (the most recent one).
    /// Rough by nature; reported as "(approx)".
    pub account_age_days: Option<i64>,
    /// Mirrors the post window, in fetch order.
    pub post_rows: Vec<PostRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_union_keeps_provenance_split() {
        let mut signals = SignalSet::default();
        signals.phone_numbers.insert("9876543210".to_string());
        signals.link_phone_numbers.insert("911234567890".to_string());
        signals.link_phone_numbers.insert("9876543210".to_string());

        let all = signals.all_phone_numbers();
        assert_eq!(all.len(), 2);
        assert_eq!(signals.phone_numbers.len(), 1);
        assert_eq!(signals.link_phone_numbers.len(), 2);
    }

    #[test]
    fn test_empty_signal_set() {
        let signals = SignalSet::default();
        assert!(signals.is_empty());
        assert!(signals.all_phone_numbers().is_empty());
    }
}
