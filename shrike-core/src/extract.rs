//! Pattern extractors for contact and identity signals
//!
//! Each extractor takes raw text and returns every match; empty input yields
//! an empty vector, never an error. Deduplication happens later at the
//! `SignalSet` level, not here.
//!
//! The patterns are the contract: they are deliberately loose, best-effort
//! heuristics, and downstream tests pin their exact semantics. Tightening
//! them is a behavior change, not a cleanup.

use regex::Regex;
use std::sync::LazyLock;

static HASHTAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#(\w+)").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\+?\d{1,3}[\s\-]?)?\d{10}").unwrap());

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

static LINK_PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:wa\.me/|t\.me/\+?)(\d{10,13})").unwrap());

/// Known location tokens checked by substring containment.
///
/// Substring matching over-triggers (a username containing a country name
/// matches), which is an accepted precision/recall tradeoff for a triage
/// tool: the investigator filters, the extractor recalls.
const GAZETTEER: &[&str] = &[
    "abu dhabi",
    "australia",
    "bangalore",
    "berlin",
    "brazil",
    "cairo",
    "canada",
    "chicago",
    "delhi",
    "dubai",
    "egypt",
    "france",
    "germany",
    "india",
    "istanbul",
    "japan",
    "karachi",
    "kenya",
    "lagos",
    "lahore",
    "london",
    "los angeles",
    "melbourne",
    "moscow",
    "mumbai",
    "nairobi",
    "new york",
    "nigeria",
    "pakistan",
    "paris",
    "russia",
    "singapore",
    "sydney",
    "tokyo",
    "toronto",
    "turkey",
    "usa",
];

/// Extract `#tag` bodies. Case preserved, no normalization.
pub fn extract_hashtags(text: &str) -> Vec<String> {
    HASHTAG_REGEX
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Extract phone-shaped numbers: optional 1-3 digit prefix (optionally `+`
/// and a space/hyphen separator) followed by exactly 10 digits.
pub fn extract_phone_numbers(text: &str) -> Vec<String> {
    PHONE_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract email-shaped strings. No domain-existence validation.
pub fn extract_emails(text: &str) -> Vec<String> {
    EMAIL_REGEX
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Extract digit sequences embedded in `wa.me/<digits>` and `t.me/+<digits>`
/// deep-links. These carry more weight than free-text numbers (someone put a
/// contact link there on purpose), so they stay a separate signal source.
pub fn extract_link_numbers(text: &str) -> Vec<String> {
    LINK_PHONE_REGEX
        .captures_iter(text)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Check lowercased text for gazetteer tokens; matches come back title-cased.
pub fn infer_locations(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    GAZETTEER
        .iter()
        .filter(|token| lower.contains(*token))
        .map(|token| title_case(token))
        .collect()
}

fn title_case(token: &str) -> String {
    token
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
