// crates/validate_pr_title/src/lib.rs

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use title_rules::{ALLOWED_PREFIXES, MAX_CONTENT_LENGTH};

// Matches `feat: message`, `docs message`, etc.: an allowed token at the
// start of the string, a colon or whitespace immediately after it, then at
// least one further character.
static PREFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^({})[:\s].+", ALLOWED_PREFIXES.join("|"))).unwrap()
});

/// The two ways a title can be rejected. The `Display` form of each variant
/// is the exact diagnostic line the tool prints to stderr.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TitleError {
    #[error(
        "PR title must start with one of the following prefixes: {}",
        ALLOWED_PREFIXES.join(", ")
    )]
    InvalidPrefix,
    #[error("PR title content must not exceed {} characters", MAX_CONTENT_LENGTH)]
    ContentTooLong,
}

/// The portion of the title the length check measures: everything after the
/// first colon, or the whole title when no colon exists (the
/// whitespace-delimited form keeps its prefix token), trimmed at both ends.
pub fn title_content(title: &str) -> &str {
    match title.split_once(':') {
        Some((_, rest)) => rest.trim(),
        None => title.trim(),
    }
}

/// Validates a PR title: the prefix check first, then the content-length
/// check. The length check never runs when the prefix check fails.
///
/// # Errors
///
/// Returns `TitleError::InvalidPrefix` when the title does not open with an
/// allowed token delimited by a colon or whitespace, and
/// `TitleError::ContentTooLong` when the trimmed content exceeds
/// `MAX_CONTENT_LENGTH` characters.
pub fn validate_title(title: &str) -> Result<(), TitleError> {
    if !PREFIX_RE.is_match(title) {
        return Err(TitleError::InvalidPrefix);
    }

    // The limit is in characters, not bytes.
    if title_content(title).chars().count() > MAX_CONTENT_LENGTH {
        return Err(TitleError::ContentTooLong);
    }

    Ok(())
}
