//! Pure filtering, text search, and per-category counts over a loaded
//! note collection.
//!
//! Everything here is a function of its inputs: callers pass the current
//! time in, nothing is mutated, and the same collection can be viewed
//! through any filter/query combination without touching storage.

use crate::domain::Note;

/// Window for the `Recent` filter: seven days, in milliseconds.
pub const RECENT_WINDOW_MS: i64 = 7 * 24 * 60 * 60 * 1000;

/// Body length (in characters) beyond which a note counts as `Long`.
pub const LONG_BODY_CHARS: usize = 600;

/// The mutually exclusive list filters.
///
/// Each is evaluated against the full collection, never against another
/// filter's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterKind {
    #[default]
    All,
    Recent,
    Tagged,
    Long,
}

impl FilterKind {
    pub fn matches(&self, note: &Note, now_ms: i64) -> bool {
        match self {
            FilterKind::All => true,
            FilterKind::Recent => now_ms - note.updated_at <= RECENT_WINDOW_MS,
            FilterKind::Tagged => !note.tags.is_empty(),
            FilterKind::Long => note.body.chars().count() > LONG_BODY_CHARS,
        }
    }
}

/// How many notes each filter would match, always computed over the
/// unfiltered collection so displayed counts are independent of the
/// currently selected filter or query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterCounts {
    pub all: usize,
    pub recent: usize,
    pub tagged: usize,
    pub long: usize,
}

impl FilterCounts {
    pub fn compute(notes: &[Note], now_ms: i64) -> FilterCounts {
        FilterCounts {
            all: notes.len(),
            recent: count(notes, FilterKind::Recent, now_ms),
            tagged: count(notes, FilterKind::Tagged, now_ms),
            long: count(notes, FilterKind::Long, now_ms),
        }
    }

    pub fn get(&self, filter: FilterKind) -> usize {
        match filter {
            FilterKind::All => self.all,
            FilterKind::Recent => self.recent,
            FilterKind::Tagged => self.tagged,
            FilterKind::Long => self.long,
        }
    }
}

fn count(notes: &[Note], filter: FilterKind, now_ms: i64) -> usize {
    notes.iter().filter(|n| filter.matches(n, now_ms)).count()
}

/// Applies the category filter, then the text query, preserving input order.
///
/// The query is trimmed and lower-cased; an empty query matches
/// everything. A non-empty query matches when it is a substring of the
/// lower-cased `title + " " + body + " " + joined tags`. Plain
/// containment only: no tokenization, no ranking, no fuzz.
pub fn filter_notes<'a>(
    notes: &'a [Note],
    filter: FilterKind,
    query: &str,
    now_ms: i64,
) -> Vec<&'a Note> {
    let q = query.trim().to_lowercase();

    notes
        .iter()
        .filter(|n| filter.matches(n, now_ms))
        .filter(|n| q.is_empty() || matches_query(n, &q))
        .collect()
}

fn matches_query(note: &Note, lowered_query: &str) -> bool {
    let haystack = format!("{} {} {}", note.title, note.body, note.tags.join(" ")).to_lowercase();
    haystack.contains(lowered_query)
}
