//! Bounded search history
//!
//! This module provides the SearchHistory component that remembers every
//! branch returned by a successful search, stamped with the time of the query.
//!
//! # Ordering
//!
//! Entries are stored in insertion order. Both read views sort by timestamp,
//! newest first, using a stable sort: the matches of a single query share one
//! timestamp and therefore keep the order the search returned them in.
//!
//! # Capacity
//!
//! After every append the oldest entries are dropped until at most `limit`
//! remain.

use crate::types::LibraryRecord;
use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Default number of entries kept
pub const HISTORY_LIMIT: usize = 100;

/// Timestamp layout used by the detailed view
pub const DETAILED_TIME_FORMAT: &str = "%b %d, %Y %I:%M %p";

/// One branch returned by a past search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHistoryEntry {
    pub timestamp: DateTime<Local>,
    pub library: LibraryRecord,
}

/// A row of the detailed history table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow<'a> {
    /// Timestamp rendered with [`DETAILED_TIME_FORMAT`]
    pub when: String,
    pub entry: &'a SearchHistoryEntry,
}

impl HistoryRow<'_> {
    pub fn branch(&self) -> &str {
        self.entry.library.branch()
    }

    pub fn zip(&self) -> &str {
        self.entry.library.zip()
    }

    pub fn phone(&self) -> &str {
        self.entry.library.phone()
    }
}

/// Rolling history of matched branches
#[derive(Debug, Clone)]
pub struct SearchHistory {
    entries: VecDeque<SearchHistoryEntry>,
    limit: usize,
}

impl SearchHistory {
    /// Create an empty history keeping at most `limit` entries
    pub fn new(limit: usize) -> Self {
        SearchHistory {
            entries: VecDeque::with_capacity(limit.min(HISTORY_LIMIT)),
            limit,
        }
    }

    /// Append one entry per library, all stamped `at`, then enforce the cap
    ///
    /// When a single call brings in more libraries than the cap allows only
    /// the last `limit` of them survive.
    pub fn record<'a, I>(&mut self, libraries: I, at: DateTime<Local>)
    where
        I: IntoIterator<Item = &'a LibraryRecord>,
    {
        for library in libraries {
            self.entries.push_back(SearchHistoryEntry {
                timestamp: at,
                library: library.clone(),
            });
        }

        while self.entries.len() > self.limit {
            self.entries.pop_front();
        }
    }

    /// Entries newest first; ties keep insertion order
    pub fn recent_view(&self) -> Vec<&SearchHistoryEntry> {
        let mut view: Vec<&SearchHistoryEntry> = self.entries.iter().collect();
        view.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        view
    }

    /// Same order as [`recent_view`](Self::recent_view) with formatted timestamps
    pub fn detailed_view(&self) -> Vec<HistoryRow<'_>> {
        self.recent_view()
            .into_iter()
            .map(|entry| HistoryRow {
                when: entry.timestamp.format(DETAILED_TIME_FORMAT).to_string(),
                entry,
            })
            .collect()
    }

    /// Entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = &SearchHistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Default for SearchHistory {
    fn default() -> Self {
        SearchHistory::new(HISTORY_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 10, 14, hour, minute, 0).unwrap()
    }

    fn library(branch: &str) -> LibraryRecord {
        LibraryRecord::new(branch, "1 Main St.", "Chicago", "IL", "60601", "https://example.org")
    }

    fn branches<'a>(entries: impl IntoIterator<Item = &'a SearchHistoryEntry>) -> Vec<String> {
        entries
            .into_iter()
            .map(|e| e.library.branch().to_string())
            .collect()
    }

    #[test]
    fn test_record_stamps_every_match() {
        let mut history = SearchHistory::default();
        let found = vec![library("Austin"), library("Legler")];

        history.record(&found, at(9, 0));

        assert_eq!(history.len(), 2);
        assert!(history.entries().all(|e| e.timestamp == at(9, 0)));
    }

    #[test]
    fn test_record_nothing_leaves_history_unchanged() {
        let mut history = SearchHistory::default();
        history.record(&[], at(9, 0));
        assert!(history.is_empty());
    }

    #[test]
    fn test_cap_drops_oldest() {
        let mut history = SearchHistory::new(3);
        let first = vec![library("a"), library("b"), library("c")];
        history.record(&first, at(9, 0));

        let second = vec![library("d"), library("e")];
        history.record(&second, at(9, 5));

        assert_eq!(history.len(), 3);
        assert_eq!(branches(history.entries()), vec!["c", "d", "e"]);
    }

    #[rstest]
    #[case::under_cap(2, 2)]
    #[case::at_cap(5, 5)]
    #[case::over_cap(9, 5)]
    fn test_len_never_exceeds_limit(#[case] inserted: usize, #[case] expected: usize) {
        let mut history = SearchHistory::new(5);
        for i in 0..inserted {
            history.record(&[library(&i.to_string())], at(10, i as u32));
        }
        assert_eq!(history.len(), expected);
    }

    #[test]
    fn test_single_query_larger_than_cap_keeps_last_matches() {
        let mut history = SearchHistory::new(2);
        let found = vec![library("a"), library("b"), library("c")];
        history.record(&found, at(9, 0));
        assert_eq!(branches(history.entries()), vec!["b", "c"]);
    }

    #[test]
    fn test_full_history_at_default_limit() {
        let mut history = SearchHistory::default();
        for i in 0..HISTORY_LIMIT {
            history.record(&[library(&format!("old-{}", i))], at(8, 0));
        }
        history.record(&[library("new-0"), library("new-1")], at(9, 0));

        assert_eq!(history.len(), HISTORY_LIMIT);
        let kept = branches(history.entries());
        assert_eq!(kept.first().map(String::as_str), Some("old-2"));
        assert_eq!(&kept[HISTORY_LIMIT - 2..], ["new-0", "new-1"]);
    }

    #[test]
    fn test_zero_limit_keeps_nothing() {
        let mut history = SearchHistory::new(0);
        history.record(&[library("a")], at(9, 0));
        assert!(history.is_empty());
    }

    #[test]
    fn test_recent_view_newest_first_with_stable_ties() {
        let mut history = SearchHistory::default();
        history.record(&[library("first-a"), library("first-b")], at(9, 0));
        history.record(&[library("second")], at(9, 30));
        history.record(&[library("third-a"), library("third-b")], at(10, 0));

        assert_eq!(
            branches(history.recent_view()),
            vec!["third-a", "third-b", "second", "first-a", "first-b"]
        );
    }

    #[test]
    fn test_recent_view_sorts_out_of_order_timestamps() {
        let mut history = SearchHistory::default();
        history.record(&[library("late")], at(11, 0));
        history.record(&[library("early")], at(7, 0));

        let view = history.recent_view();
        assert!(view.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
        assert_eq!(branches(view), vec!["late", "early"]);
    }

    #[test]
    fn test_views_do_not_mutate_history() {
        let mut history = SearchHistory::default();
        history.record(&[library("a")], at(9, 0));
        history.record(&[library("b")], at(10, 0));

        let _ = history.recent_view();
        let _ = history.detailed_view();

        assert_eq!(branches(history.entries()), vec!["a", "b"]);
    }

    #[test]
    fn test_detailed_view_formats_timestamp() {
        let mut history = SearchHistory::default();
        let found = vec![library("Chinatown").with_phone(" (312) 747-8013 ")];
        history.record(&found, at(15, 5));

        let rows = history.detailed_view();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].when, "Oct 14, 2026 03:05 PM");
        assert_eq!(rows[0].branch(), "Chinatown");
        assert_eq!(rows[0].zip(), "60601");
        assert_eq!(rows[0].phone(), "(312) 747-8013");
    }
}
