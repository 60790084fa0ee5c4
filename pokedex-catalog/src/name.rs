//! Pokemon name normalization and syntax rules.
//!
//! Names are stored with whitespace runs collapsed to a single underscore
//! (`"mr  mime"` becomes `"mr_mime"`), matching the seed data where spaces
//! and hyphens were replaced by underscores. A valid name starts with an
//! ASCII letter and continues with at least one ASCII word character.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s+").expect("whitespace pattern is valid")
});

static NAME_SYNTAX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9_\s]+$").expect("name pattern is valid")
});

/// Trim the name and collapse internal whitespace runs to `_`.
pub fn normalize_name(raw: &str) -> String {
    WHITESPACE_RUN.replace_all(raw.trim(), "_").into_owned()
}

/// Whether an already-normalized name satisfies the name syntax.
pub fn is_valid_name_syntax(name: &str) -> bool {
    NAME_SYNTAX.is_match(name)
}

#[cfg(test)]
#[path = "tests/name_tests.rs"]
mod tests;
