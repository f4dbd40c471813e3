//! Shrike Core - Signal extraction and heuristic scoring for profile triage
//!
//! This crate provides the foundational pieces:
//! - Domain model (snapshot, post window, signals, analysis result)
//! - Pattern extractors (hashtags, phones, emails, link numbers, locations)
//! - Candidate generators (Gmail guesses, platform probe registry)
//! - Scoring engine (engagement ratio, scam-risk score)
//! - Aggregator producing one immutable `AnalysisResult` per scan
//!
//! Everything here is pure: no network, no filesystem. Outputs are
//! best-effort hints for a human reviewer, never assertions of fact.

pub mod aggregate;
pub mod candidates;
pub mod extract;
pub mod model;
pub mod score;

pub use aggregate::*;
pub use candidates::*;
pub use extract::*;
pub use model::*;
pub use score::*;

/// Fixed size of the recent-post window
pub const POST_WINDOW: usize = 6;

/// Upper bound of the scam-risk score
pub const SCAM_SCORE_CAP: u8 = 10;
