//! Heuristic scoring: engagement ratio and scam-risk score
//!
//! Both are pure functions of already-fetched data. The scam-risk score is
//! an ordinal 0-10 indicator of profile-shape anomalies, never a calibrated
//! probability.

use regex::Regex;
use std::sync::LazyLock;

use crate::model::{PostSample, ProfileSnapshot};
use crate::SCAM_SCORE_CAP;

static CONSECUTIVE_DIGITS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4,}").unwrap());

/// Which component tops up the base scam-score rules.
///
/// Two variants of this tool existed in the wild with incompatible rules:
/// one penalized a missing profile picture, the other folded the username
/// pattern score into the total. Both are kept behind an explicit switch
/// rather than merged; they must never be combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScoringPolicy {
    /// +1 when the profile has no picture.
    #[default]
    ProfileShape,
    /// Seed the score with `username_pattern_score` instead.
    UsernamePattern,
}

/// Average likes over the window as a percentage of followers, 2 decimals.
/// 0 when the window is empty or followers are 0. Comments are exported but
/// deliberately excluded from this metric.
pub fn engagement_ratio(posts: &[PostSample], follower_count: u64) -> f64 {
    if posts.is_empty() || follower_count == 0 {
        return 0.0;
    }
    let total_likes: u64 = posts.iter().map(|p| p.like_count).sum();
    let avg_likes = total_likes as f64 / posts.len() as f64;
    round2(avg_likes / follower_count as f64 * 100.0)
}

/// Additive profile-shape heuristic, capped at [`SCAM_SCORE_CAP`].
pub fn scam_risk_score(snapshot: &ProfileSnapshot, policy: ScoringPolicy) -> u8 {
    let mut score: u32 = match policy {
        ScoringPolicy::ProfileShape => u32::from(!snapshot.has_profile_picture),
        ScoringPolicy::UsernamePattern => username_pattern_score(&snapshot.username),
    };

    if snapshot.follower_count < 100 {
        score += 2;
    }
    if snapshot.post_count < 3 {
        score += 2;
    }
    if snapshot.following_count > snapshot.follower_count.saturating_mul(3) {
        score += 2;
    }
    if snapshot.biography.is_empty() {
        score += 1;
    }

    score.min(u32::from(SCAM_SCORE_CAP)) as u8
}

/// Auxiliary signal over the username shape: +2 for 4+ consecutive digits,
/// +1 for an underscore, +1 for length over 15.
pub fn username_pattern_score(username: &str) -> u32 {
    let mut score = 0;
    if CONSECUTIVE_DIGITS_REGEX.is_match(username) {
        score += 2;
    }
    if username.contains('_') {
        score += 1;
    }
    if username.chars().count() > 15 {
        score += 1;
    }
    score
}

/// Followers / following, 2 decimals, 0 when following is 0.
pub fn follower_following_ratio(follower_count: u64, following_count: u64) -> f64 {
    if following_count == 0 {
        return 0.0;
    }
    round2(follower_count as f64 / following_count as f64)
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn post(likes: u64) -> PostSample {
        PostSample {
            published_at: Utc::now(),
            caption: String::new(),
            like_count: likes,
            comment_count: 0,
        }
    }

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            username: "someuser".to_string(),
            full_name: "Some User".to_string(),
            biography: "hello".to_string(),
            follower_count: 5000,
            following_count: 300,
            post_count: 40,
            is_private: false,
            has_profile_picture: true,
        }
    }

    #[test]
    fn test_engagement_ratio_empty_window() {
        assert_eq!(engagement_ratio(&[], 100), 0.0);
    }

    #[test]
    fn test_engagement_ratio_zero_followers() {
        assert_eq!(engagement_ratio(&[post(50)], 0), 0.0);
    }

    #[test]
    fn test_engagement_ratio_avg_likes() {
        // avg 10 likes / 1000 followers = 1.0%
        let posts = vec![post(5), post(15)];
        assert!((engagement_ratio(&posts, 1000) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_engagement_ratio_rounds_to_two_decimals() {
        let posts = vec![post(1), post(2), post(1)];
        // avg 4/3 likes / 700 followers * 100 = 0.190476... -> 0.19
        let ratio = engagement_ratio(&posts, 700);
        assert!((ratio - 0.19).abs() < 1e-9);
    }

    #[test]
    fn test_scam_score_clean_profile() {
        assert_eq!(scam_risk_score(&snapshot(), ScoringPolicy::ProfileShape), 0);
    }

    #[test]
    fn test_scam_score_monotonic_per_condition() {
        let mut s = snapshot();
        let mut previous = scam_risk_score(&s, ScoringPolicy::ProfileShape);

        s.follower_count = 50;
        let after_followers = scam_risk_score(&s, ScoringPolicy::ProfileShape);
        assert!(after_followers >= previous);
        previous = after_followers;

        s.post_count = 1;
        let after_posts = scam_risk_score(&s, ScoringPolicy::ProfileShape);
        assert!(after_posts >= previous);
        previous = after_posts;

        s.following_count = 10_000;
        let after_following = scam_risk_score(&s, ScoringPolicy::ProfileShape);
        assert!(after_following >= previous);
        previous = after_following;

        s.biography = String::new();
        let after_bio = scam_risk_score(&s, ScoringPolicy::ProfileShape);
        assert!(after_bio >= previous);
        previous = after_bio;

        s.has_profile_picture = false;
        let after_picture = scam_risk_score(&s, ScoringPolicy::ProfileShape);
        assert!(after_picture >= previous);
    }

    #[test]
    fn test_scam_score_capped_at_ten() {
        let s = ProfileSnapshot {
            username: "user_12345_with_a_very_long_handle".to_string(),
            full_name: String::new(),
            biography: String::new(),
            follower_count: 1,
            following_count: 9000,
            post_count: 0,
            is_private: false,
            has_profile_picture: false,
        };
        assert_eq!(scam_risk_score(&s, ScoringPolicy::ProfileShape), 8);
        assert_eq!(scam_risk_score(&s, ScoringPolicy::UsernamePattern), 10);
    }

    #[test]
    fn test_username_pattern_score() {
        assert_eq!(username_pattern_score("plain"), 0);
        assert_eq!(username_pattern_score("user_name"), 1);
        assert_eq!(username_pattern_score("user1234"), 2);
        assert_eq!(username_pattern_score("a_very_long_username_1234"), 4);
    }

    #[test]
    fn test_policies_stay_distinct() {
        let mut s = snapshot();
        s.username = "user_12345".to_string();
        s.has_profile_picture = false;

        // Shape policy sees the missing picture, not the username.
        assert_eq!(scam_risk_score(&s, ScoringPolicy::ProfileShape), 1);
        // Username policy sees the digits+underscore, not the picture.
        assert_eq!(scam_risk_score(&s, ScoringPolicy::UsernamePattern), 3);
    }

    #[test]
    fn test_follower_following_ratio() {
        assert_eq!(follower_following_ratio(100, 0), 0.0);
        assert!((follower_following_ratio(150, 60) - 2.5).abs() < 1e-9);
    }
}
