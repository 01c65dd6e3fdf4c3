// crates/title_rules/src/lib.rs

//! The single source of truth for the PR title convention shared by the
//! validation tool-chain.

/// Prefix tokens a PR title may open with, lowercase canonical form.
/// Matching against a title is case-insensitive.
pub const ALLOWED_PREFIXES: &[&str] = &[
    "build", "chore", "ci", "docs", "feat", "fix", "perf", "refactor", "style", "test", "sample",
];

/// Upper bound on the title content, counted in characters after trimming.
pub const MAX_CONTENT_LENGTH: usize = 50;
