// Listing engines: filtering, sorting, saved preferences and per-user flags.
// Engines are pure functions over `Listable` records; handlers own all I/O.

pub mod filter;
pub mod flags;
pub mod handlers;
pub mod preferences;
pub mod sort;

pub use filter::{filter_items, FilterCriteria};
pub use sort::{sort_items, SortKey};

/// Read-only view of a listed record (opportunity, person, skill).
///
/// Fields a record type does not carry default to empty / zero, which is
/// exactly how the filter and sort engines treat missing values.
pub trait Listable {
    fn id(&self) -> &str;

    /// Display name used by the `name` sort.
    fn name(&self) -> &str;

    fn title(&self) -> &str;

    fn organization(&self) -> &str {
        ""
    }

    fn description(&self) -> &str {
        ""
    }

    /// Department / category tag.
    fn category(&self) -> &str;

    fn location(&self) -> &str {
        ""
    }

    /// Type tag (full-time, internship, alumni, …).
    fn kind(&self) -> &str;

    fn compensation(&self) -> u64 {
        0
    }

    /// Raw posted timestamp; see [`sort::posted_timestamp`].
    fn posted(&self) -> &str {
        ""
    }

    fn relevance(&self) -> u32 {
        0
    }

    /// Texts the free-text search matches against.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title(), self.organization(), self.description()]
    }
}

/// Extracts the digits of a compensation value such as `"450,000 RWF"`.
/// Returns `None` when there are no digits or the number overflows.
pub fn parse_compensation(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Splits a comma-separated query value into trimmed, non-empty tags.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}
