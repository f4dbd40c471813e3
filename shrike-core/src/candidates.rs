//! Candidate generators: identifiers derived, not extracted
//!
//! Gmail guesses from the username/full name, and the fixed registry of
//! platforms a username footprint is probed against.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A platform the footprint prober checks for a matching username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    /// Human-readable name
    pub name: &'static str,
    /// URL template with {username} placeholder
    pub url_template: &'static str,
}

impl Platform {
    /// Build the probe URL for a username
    pub fn build_url(&self, username: &str) -> String {
        self.url_template.replace("{username}", username)
    }
}

/// Probe table, sorted by name. Probe and report order follow this table so
/// footprint output stays deterministic.
pub static PLATFORMS: &[Platform] = &[
    Platform {
        name: "GitHub",
        url_template: "https://github.com/{username}",
    },
    Platform {
        name: "Medium",
        url_template: "https://medium.com/@{username}",
    },
    Platform {
        name: "Pinterest",
        url_template: "https://www.pinterest.com/{username}/",
    },
    Platform {
        name: "Reddit",
        url_template: "https://www.reddit.com/user/{username}",
    },
    Platform {
        name: "Snapchat",
        url_template: "https://www.snapchat.com/add/{username}",
    },
    Platform {
        name: "Telegram",
        url_template: "https://t.me/{username}",
    },
    Platform {
        name: "TikTok",
        url_template: "https://www.tiktok.com/@{username}",
    },
    Platform {
        name: "Twitch",
        url_template: "https://www.twitch.tv/{username}",
    },
    Platform {
        name: "X",
        url_template: "https://x.com/{username}",
    },
    Platform {
        name: "YouTube",
        url_template: "https://www.youtube.com/@{username}",
    },
];

/// Derive plausible Gmail addresses from a username and optional full name.
///
/// Pure and deterministic; the output is a sorted, deduplicated list of
/// guesses for manual verification, never asserted to exist.
pub fn generate_gmail_candidates(username: &str, full_name: &str) -> Vec<String> {
    let mut candidates = BTreeSet::new();

    let base = alnum_lower(username);
    if !base.is_empty() {
        candidates.insert(format!("{base}@gmail.com"));
        candidates.insert(format!("{base}123@gmail.com"));
    }

    if username.contains('_') {
        let segments: Vec<&str> = username.split('_').collect();
        let first = alnum_lower(segments[0]);
        let last = alnum_lower(segments[segments.len() - 1]);
        if !first.is_empty() && !last.is_empty() {
            candidates.insert(format!("{first}.{last}@gmail.com"));
        }
    }

    let tokens: Vec<&str> = full_name.split_whitespace().collect();
    if tokens.len() >= 2 {
        let first = alnum_lower(tokens[0]);
        let last = alnum_lower(tokens[tokens.len() - 1]);
        if !first.is_empty() && !last.is_empty() {
            candidates.insert(format!("{first}{last}@gmail.com"));
            candidates.insert(format!("{first}.{last}@gmail.com"));
        }
    }

    candidates.into_iter().collect()
}

fn alnum_lower(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}
