//! Textual UUID validation

use std::sync::OnceLock;

use regex::Regex;

/// Length in bytes of every textual UUID this crate accepts or produces.
pub const LENGTH: usize = 36;

/// Returns the compiled validation pattern, creating it on first use.
fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)^\{?[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}\}?$",
        )
        .expect("uuid_forge: could not compile validation pattern")
    })
}

/// Tests whether `candidate` looks like a textual UUID.
///
/// The candidate must be exactly [`LENGTH`] bytes long and consist of 32 hex digits in either
/// case, grouped 8-4-4-4-12, with an optional leading `{`, an optional trailing `}` and an
/// optional hyphen between each pair of groups. Braces and hyphens are checked independently,
/// so forms such as `{6ba7b8109dad-11d1-80b4-00c04fd430c8` pass as long as the length matches.
///
/// # Examples
///
/// ```rust
/// use uuid_forge::is_valid;
///
/// assert!(is_valid("6ba7b810-9dad-11d1-80b4-00c04fd430c8"));
/// assert!(!is_valid("6ba7b810-9dad-11d1-80b4"));
/// ```
pub fn is_valid(candidate: &str) -> bool {
    candidate.len() == LENGTH && pattern().is_match(candidate)
}
