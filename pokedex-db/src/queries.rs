//! Listing queries: name filtering and pagination.

use std::fmt;
use std::str::FromStr;

use pokedex_catalog::PokemonRecord;
use regex::Regex;
use serde::Serialize;

/// Default page size: the original 151 Kanto Pokedex entries.
pub const KANTO_POKEDEX_OG: usize = 151;

/// Upper bound on the number of records returned by a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Count(usize),
    Unbounded,
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Count(KANTO_POKEDEX_OG)
    }
}

impl FromStr for Limit {
    type Err = String;

    /// Parse `"all"` or `"-1"` as unbounded, anything else as a count.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "all" | "-1" => Ok(Limit::Unbounded),
            other => other
                .parse::<usize>()
                .map(Limit::Count)
                .map_err(|_| format!("invalid limit '{other}': expected a count or 'all'")),
        }
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Count(n) => write!(f, "{n}"),
            Limit::Unbounded => f.write_str("all"),
        }
    }
}

/// Parameters of a listing: optional name pattern plus a page window.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    /// Regular expression tested against record names.
    pub pattern: Option<String>,
    pub limit: Limit,
    pub offset: usize,
}

impl ListQuery {
    /// Every record, unfiltered and unpaginated.
    pub fn all() -> Self {
        Self {
            limit: Limit::Unbounded,
            ..Self::default()
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn limit(mut self, limit: Limit) -> Self {
        self.limit = limit;
        self
    }

    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }
}

/// One window of a listing, with enough context to request the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub records: Vec<PokemonRecord>,
    /// Number of records matching the pattern, before pagination.
    pub total: usize,
    pub offset: usize,
    /// Offset of the following page, if more matching records remain.
    pub next_offset: Option<usize>,
}

/// How a name pattern is applied.
enum NameFilter {
    Pattern(Regex),
    /// Fallback for patterns that are not valid regular expressions.
    Literal(String),
}

impl NameFilter {
    fn new(pattern: &str) -> Self {
        match Regex::new(pattern) {
            Ok(regex) => NameFilter::Pattern(regex),
            Err(_) => NameFilter::Literal(pattern.to_string()),
        }
    }

    fn matches(&self, name: &str) -> bool {
        match self {
            NameFilter::Pattern(regex) => regex.is_match(name),
            NameFilter::Literal(text) => name.contains(text.as_str()),
        }
    }
}

/// Filter and paginate `records` according to `query`.
pub fn apply_query(records: Vec<PokemonRecord>, query: &ListQuery) -> Page {
    let filter = query
        .pattern
        .as_deref()
        .filter(|p| !p.is_empty())
        .map(NameFilter::new);

    let matching: Vec<PokemonRecord> = match filter {
        Some(filter) => records.into_iter().filter(|r| filter.matches(&r.name)).collect(),
        None => records,
    };

    let total = matching.len();
    let start = query.offset.min(total);
    let end = match query.limit {
        Limit::Count(n) => start.saturating_add(n).min(total),
        Limit::Unbounded => total,
    };
    let next_offset = (end < total).then_some(end);

    Page {
        records: matching.into_iter().skip(start).take(end - start).collect(),
        total,
        offset: start,
        next_offset,
    }
}

#[cfg(test)]
#[path = "tests/queries_tests.rs"]
mod tests;
