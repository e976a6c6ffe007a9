//! Textual format patterns for generated suite records
//! Kept in a separate crate so the compiled regexes are shared by the core and the CLI

use once_cell::sync::Lazy;
use regex::Regex;

/// Run identifiers such as `ADO-10001`
pub mod run_id {
    use super::*;

    pub static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^ADO-\d{5}$").expect("Invalid regex pattern"));

    pub fn is_valid(text: &str) -> bool {
        PATTERN.is_match(text)
    }
}

/// Human readable durations such as `4m 7s`
pub mod duration {
    use super::*;

    pub static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^(\d+)m (\d+)s$").expect("Invalid regex pattern"));

    pub fn is_valid(text: &str) -> bool {
        parse(text).is_some()
    }

    /// Reconstruct the number of seconds encoded in a duration string.
    ///
    /// Returns `None` when the text does not match or the seconds part is 60 or more.
    pub fn parse(text: &str) -> Option<u32> {
        let caps = PATTERN.captures(text)?;
        let minutes: u32 = caps.get(1)?.as_str().parse().ok()?;
        let seconds: u32 = caps.get(2)?.as_str().parse().ok()?;

        if seconds >= 60 {
            return None;
        }

        minutes.checked_mul(60)?.checked_add(seconds)
    }
}

/// Semantic versions such as `v2.4.13`
pub mod version {
    use super::*;

    pub static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^v[1-3]\.\d\.\d{1,2}$").expect("Invalid regex pattern"));

    pub fn is_valid(text: &str) -> bool {
        PATTERN.is_match(text)
    }
}

/// ISO-8601 UTC timestamps with millisecond precision
pub mod timestamp {
    use super::*;

    pub static PATTERN: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"^\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z$")
            .expect("Invalid regex pattern")
    });

    pub fn is_valid(text: &str) -> bool {
        PATTERN.is_match(text)
    }
}

/// Response data identifiers such as `PAYMENT-00010003`
pub mod data_id {
    use super::*;

    pub static PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[A-Z]+-\d{8}$").expect("Invalid regex pattern"));

    pub fn is_valid(text: &str) -> bool {
        PATTERN.is_match(text)
    }
}
