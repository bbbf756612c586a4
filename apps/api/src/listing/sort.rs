//! Sort engine. Orders are stable and never mutate the caller's slice.

use std::cmp::Reverse;

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::listing::Listable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Newest,
    Oldest,
    SalaryHigh,
    SalaryLow,
    Relevance,
    Name,
    Company,
    Title,
}

impl SortKey {
    pub const DEFAULT: SortKey = SortKey::Newest;

    /// Parses a sort selection. Unknown values yield `None`, which callers
    /// treat as "keep the current order".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "newest" => Some(SortKey::Newest),
            "oldest" => Some(SortKey::Oldest),
            "salary-high" | "compensation-high" => Some(SortKey::SalaryHigh),
            "salary-low" | "compensation-low" => Some(SortKey::SalaryLow),
            "relevance" => Some(SortKey::Relevance),
            "name" => Some(SortKey::Name),
            "company" => Some(SortKey::Company),
            "title" => Some(SortKey::Title),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Newest => "newest",
            SortKey::Oldest => "oldest",
            SortKey::SalaryHigh => "salary-high",
            SortKey::SalaryLow => "salary-low",
            SortKey::Relevance => "relevance",
            SortKey::Name => "name",
            SortKey::Company => "company",
            SortKey::Title => "title",
        }
    }
}

/// Milliseconds since the Unix epoch for a posted timestamp.
/// Anything that does not parse sorts as epoch zero.
pub fn posted_timestamp(raw: &str) -> i64 {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.timestamp_millis();
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return dt.and_utc().timestamp_millis();
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Returns a new vector ordered by `key`. `None` keeps the input order.
///
/// `slice::sort_by*` is stable, so items with equal keys keep their
/// relative order.
pub fn sort_items<T: Listable + Clone>(items: &[T], key: Option<SortKey>) -> Vec<T> {
    let mut sorted = items.to_vec();
    let Some(key) = key else {
        return sorted;
    };
    match key {
        SortKey::Newest => sorted.sort_by_key(|i| Reverse(posted_timestamp(i.posted()))),
        SortKey::Oldest => sorted.sort_by_key(|i| posted_timestamp(i.posted())),
        SortKey::SalaryHigh => sorted.sort_by_key(|i| Reverse(i.compensation())),
        SortKey::SalaryLow => sorted.sort_by_key(|i| i.compensation()),
        SortKey::Relevance => sorted.sort_by_key(|i| Reverse(i.relevance())),
        SortKey::Name => sorted.sort_by(|a, b| a.name().cmp(b.name())),
        SortKey::Company => sorted.sort_by(|a, b| a.organization().cmp(b.organization())),
        SortKey::Title => sorted.sort_by(|a, b| a.title().cmp(b.title())),
    }
    sorted
}
