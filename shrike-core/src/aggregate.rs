//! Aggregator: one pass over the post window into one `AnalysisResult`
//!
//! Walks at most [`POST_WINDOW`] posts exactly once, feeding the biography
//! and each caption to every extractor, then scores the already-fetched data.
//! Never emits a partial result; a fetch failure upstream means this is
//! never called.

use chrono::Utc;
use std::collections::BTreeMap;

use crate::candidates::generate_gmail_candidates;
use crate::extract::{
    extract_emails, extract_hashtags, extract_link_numbers, extract_phone_numbers,
    infer_locations,
};
use crate::model::{
    AnalysisResult, CandidateSet, PostRow, PostSample, ProfileSnapshot, SignalSet,
};
use crate::score::{engagement_ratio, follower_following_ratio, scam_risk_score, ScoringPolicy};
use crate::POST_WINDOW;

/// Analyze one fetched profile into the scan's single `AnalysisResult`.
///
/// `posts` may be arbitrarily long; only the first [`POST_WINDOW`] entries
/// are consumed, which bounds cost on large accounts. The `footprint` table
/// comes from the network prober (empty when probing was skipped). A private
/// snapshot contributes no post-derived data even if posts are supplied.
pub fn analyze(
    snapshot: ProfileSnapshot,
    posts: impl IntoIterator<Item = PostSample>,
    footprint: BTreeMap<String, String>,
    policy: ScoringPolicy,
) -> AnalysisResult {
    let mut signals = SignalSet::default();
    collect_signals(&mut signals, &snapshot.biography);

    let mut window: Vec<PostSample> = Vec::with_capacity(POST_WINDOW);
    let mut post_rows: Vec<PostRow> = Vec::with_capacity(POST_WINDOW);

    if !snapshot.is_private {
        for post in posts.into_iter().take(POST_WINDOW) {
            collect_signals(&mut signals, &post.caption);
            post_rows.push(PostRow {
                date: post.published_at.date_naive(),
                likes: post.like_count,
                comments: post.comment_count,
            });
            window.push(post);
        }
    }

    // First post in fetch order is the most recent one; the age estimate is
    // rough on purpose and labelled "(approx)" in reports.
    let account_age_days = window
        .first()
        .map(|post| (Utc::now() - post.published_at).num_days());

    let engagement = engagement_ratio(&window, snapshot.follower_count);
    let risk = scam_risk_score(&snapshot, policy);
    let ff_ratio = follower_following_ratio(snapshot.follower_count, snapshot.following_count);

    let candidates = CandidateSet {
        gmail_candidates: generate_gmail_candidates(&snapshot.username, &snapshot.full_name),
        footprint,
    };

    AnalysisResult {
        snapshot,
        signals,
        candidates,
        engagement_ratio: engagement,
        scam_risk_score: risk,
        follower_following_ratio: ff_ratio,
        account_age_days,
        post_rows,
    }
}

/// Run every extractor over one piece of text, merging into the signal set.
fn collect_signals(signals: &mut SignalSet, text: &str) {
    if text.is_empty() {
        return;
    }
    signals.hashtags.extend(extract_hashtags(text));
    signals.emails.extend(extract_emails(text));
    signals.phone_numbers.extend(extract_phone_numbers(text));
    signals.link_phone_numbers.extend(extract_link_numbers(text));
    signals.inferred_locations.extend(infer_locations(text));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            username: "someuser".to_string(),
            full_name: "Some User".to_string(),
            biography: "deals at deals@example.com".to_string(),
            follower_count: 1000,
            following_count: 500,
            post_count: 20,
            is_private: false,
            has_profile_picture: true,
        }
    }

    fn post(caption: &str, likes: u64) -> PostSample {
        PostSample {
            published_at: Utc::now() - Duration::days(3),
            caption: caption.to_string(),
            like_count: likes,
            comment_count: 2,
        }
    }

    #[test]
    fn test_window_bounded_at_six() {
        let posts: Vec<PostSample> = (0..1000).map(|i| post("#spam", i)).collect();
        let result = analyze(snapshot(), posts, BTreeMap::new(), ScoringPolicy::default());
        assert_eq!(result.post_rows.len(), 6);
    }

    #[test]
    fn test_signals_merge_bio_and_captions() {
        let posts = vec![
            post("ping me on wa.me/919876543210 #promo", 10),
            post("or mail sales@example.com #promo", 10),
        ];
        let result = analyze(snapshot(), posts, BTreeMap::new(), ScoringPolicy::default());

        assert!(result.signals.emails.contains("deals@example.com"));
        assert!(result.signals.emails.contains("sales@example.com"));
        assert!(result.signals.link_phone_numbers.contains("919876543210"));
        // Duplicate hashtag across posts collapses to one set member.
        assert_eq!(result.signals.hashtags.len(), 1);
    }

    #[test]
    fn test_private_snapshot_ignores_posts() {
        let mut s = snapshot();
        s.is_private = true;
        let posts = vec![post("#leaky caption with a@b.co", 10)];
        let result = analyze(s, posts, BTreeMap::new(), ScoringPolicy::default());

        assert!(result.post_rows.is_empty());
        assert!(result.signals.hashtags.is_empty());
        assert_eq!(result.engagement_ratio, 0.0);
        assert_eq!(result.account_age_days, None);
        // Bio-derived signals are still allowed.
        assert!(result.signals.emails.contains("deals@example.com"));
    }

    #[test]
    fn test_engagement_from_window() {
        let posts = vec![post("", 5), post("", 15)];
        let result = analyze(snapshot(), posts, BTreeMap::new(), ScoringPolicy::default());
        // avg 10 likes / 1000 followers = 1.0%
        assert!((result.engagement_ratio - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_account_age_from_most_recent_post() {
        let posts = vec![post("", 1)];
        let result = analyze(snapshot(), posts, BTreeMap::new(), ScoringPolicy::default());
        assert_eq!(result.account_age_days, Some(3));
    }

    #[test]
    fn test_candidates_populated() {
        let mut footprint = BTreeMap::new();
        footprint.insert(
            "GitHub".to_string(),
            "https://github.com/someuser".to_string(),
        );
        let result = analyze(snapshot(), Vec::new(), footprint, ScoringPolicy::default());

        assert!(result
            .candidates
            .gmail_candidates
            .contains(&"someuser@gmail.com".to_string()));
        assert_eq!(result.candidates.footprint.len(), 1);
    }

    #[test]
    fn test_post_rows_mirror_window_order() {
        let older = Utc::now() - Duration::days(10);
        let newer = Utc::now() - Duration::days(1);
        let posts = vec![
            PostSample {
                published_at: newer,
                caption: String::new(),
                like_count: 7,
                comment_count: 1,
            },
            PostSample {
                published_at: older,
                caption: String::new(),
                like_count: 3,
                comment_count: 0,
            },
        ];
        let result = analyze(snapshot(), posts, BTreeMap::new(), ScoringPolicy::default());
        assert_eq!(result.post_rows[0].likes, 7);
        assert_eq!(result.post_rows[1].likes, 3);
    }
}
