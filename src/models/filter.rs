//! Timeline filtering and countdown numbering.
//!
//! [`filter_entries`] is a stable filter: entries that pass keep their
//! input order. Numbering counts down from the number of matches, so the
//! first card shown carries the highest number.

use std::fmt;

use super::TimelineEntry;

/// Category selector for the work timeline
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    /// Exact, case-sensitive match on the entry's category tag
    Only(String),
}

impl CategoryFilter {
    /// `"all"` maps to [`CategoryFilter::All`]; anything else is a tag.
    pub fn from_tag(tag: &str) -> Self {
        if tag == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(tag.to_string())
        }
    }

    pub fn matches(&self, entry: &TimelineEntry) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(tag) => entry.category == *tag,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(tag) => f.write_str(tag),
        }
    }
}

/// Whether the category dimension applies to a collection.
///
/// Education records have no meaningful taxonomy, so callers filtering them
/// pass [`CategoryScope::Skipped`] and only the search query is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryScope {
    Applies,
    Skipped,
}

/// Case-insensitive substring match on title or organization.
pub fn matches_query(entry: &TimelineEntry, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    entry.title.to_lowercase().contains(&needle)
        || entry.organization.to_lowercase().contains(&needle)
}

/// Entries passing both the category and the search predicate, in input order.
pub fn filter_entries<'a>(
    entries: &'a [TimelineEntry],
    category: &CategoryFilter,
    query: &str,
    scope: CategoryScope,
) -> Vec<&'a TimelineEntry> {
    entries
        .iter()
        .filter(|entry| scope == CategoryScope::Skipped || category.matches(entry))
        .filter(|entry| matches_query(entry, query))
        .collect()
}

/// Countdown label for the entry at `position` among `total` matches.
pub fn display_number(total: usize, position: usize) -> usize {
    total.saturating_sub(position)
}

/// Pair each filtered entry with its countdown label.
pub fn numbered<'a>(filtered: &[&'a TimelineEntry]) -> Vec<(usize, &'a TimelineEntry)> {
    let total = filtered.len();
    filtered
        .iter()
        .enumerate()
        .map(|(position, entry)| (display_number(total, position), *entry))
        .collect()
}

/// Active filter state owned by the About view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    pub fn apply<'a>(
        &self,
        entries: &'a [TimelineEntry],
        scope: CategoryScope,
    ) -> Vec<&'a TimelineEntry> {
        filter_entries(entries, &self.category, &self.query, scope)
    }

    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All || !self.query.is_empty()
    }

    pub fn clear(&mut self) {
        self.category = CategoryFilter::All;
        self.query.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::timeline::{FREELANCE, FULL_TIME, INTERNSHIP};

    fn scenario() -> Vec<TimelineEntry> {
        vec![
            TimelineEntry::new(1, "Backend Engineer", "Acme", FULL_TIME),
            TimelineEntry::new(2, "Frontend Intern", "Beta", INTERNSHIP),
        ]
    }

    fn sample() -> Vec<TimelineEntry> {
        vec![
            TimelineEntry::new(1, "Full-Stack Developer", "NovaTech", FULL_TIME),
            TimelineEntry::new(2, "Web Intern", "Digitek", INTERNSHIP),
            TimelineEntry::new(3, "Freelance Full Stack Dev", "Upwork", FREELANCE),
            TimelineEntry::new(4, "Data Intern", "Acme Labs", INTERNSHIP),
        ]
    }

    fn ids(entries: &[&TimelineEntry]) -> Vec<u32> {
        entries.iter().map(|e| e.id).collect()
    }

    #[test]
    fn test_filter_by_category() {
        let entries = scenario();
        let filter = CategoryFilter::from_tag("internship");
        let result = filter_entries(&entries, &filter, "", CategoryScope::Applies);
        assert_eq!(ids(&result), vec![2]);
    }

    #[test]
    fn test_filter_by_query_matches_organization_case_insensitive() {
        let entries = scenario();
        let result = filter_entries(&entries, &CategoryFilter::All, "acme", CategoryScope::Applies);
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_filter_by_query_matches_title() {
        let entries = sample();
        let result = filter_entries(&entries, &CategoryFilter::All, "INTERN", CategoryScope::Applies);
        assert_eq!(ids(&result), vec![2, 4]);
    }

    #[test]
    fn test_filter_all_empty_is_identity() {
        let entries = sample();
        let result = filter_entries(&entries, &CategoryFilter::All, "", CategoryScope::Applies);
        let owned: Vec<TimelineEntry> = result.into_iter().cloned().collect();
        assert_eq!(owned, entries);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let entries = sample();
        let result = filter_entries(
            &entries,
            &CategoryFilter::All,
            "nonexistent-substring-zzz",
            CategoryScope::Applies,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let entries = sample();
        let category = CategoryFilter::from_tag(INTERNSHIP);
        let once: Vec<TimelineEntry> =
            filter_entries(&entries, &category, "in", CategoryScope::Applies)
                .into_iter()
                .cloned()
                .collect();
        let twice: Vec<TimelineEntry> =
            filter_entries(&once, &category, "in", CategoryScope::Applies)
                .into_iter()
                .cloned()
                .collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let entries = scenario();
        let filter = CategoryFilter::from_tag("Internship");
        let result = filter_entries(&entries, &filter, "", CategoryScope::Applies);
        assert!(result.is_empty());
    }

    #[test]
    fn test_filter_combines_with_and() {
        let entries = sample();
        let filter = CategoryFilter::from_tag(INTERNSHIP);
        let result = filter_entries(&entries, &filter, "acme", CategoryScope::Applies);
        assert_eq!(ids(&result), vec![4]);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let mut entries = sample();
        entries.reverse();
        let result = filter_entries(&entries, &CategoryFilter::from_tag(INTERNSHIP), "", CategoryScope::Applies);
        assert_eq!(ids(&result), vec![4, 2]);
    }

    #[test]
    fn test_skipped_scope_ignores_category() {
        let entries = sample();
        let filter = CategoryFilter::from_tag("no-such-category");
        let result = filter_entries(&entries, &filter, "dev", CategoryScope::Skipped);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_display_numbers_count_down() {
        let entries = vec![
            TimelineEntry::new(1, "A", "x", FULL_TIME),
            TimelineEntry::new(2, "B", "x", FULL_TIME),
            TimelineEntry::new(3, "C", "x", FULL_TIME),
        ];
        let filtered = filter_entries(&entries, &CategoryFilter::All, "", CategoryScope::Applies);
        let labels: Vec<(usize, &str)> = numbered(&filtered)
            .into_iter()
            .map(|(n, e)| (n, e.title.as_str()))
            .collect();
        assert_eq!(labels, vec![(3, "A"), (2, "B"), (1, "C")]);
    }

    #[test]
    fn test_display_number_out_of_range_saturates() {
        assert_eq!(display_number(2, 5), 0);
    }

    #[test]
    fn test_filter_state_clear() {
        let mut state = FilterState {
            category: CategoryFilter::from_tag(FULL_TIME),
            query: "acme".to_string(),
        };
        assert!(state.is_active());
        state.clear();
        assert!(!state.is_active());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn test_category_filter_display() {
        assert_eq!(CategoryFilter::All.to_string(), "all");
        assert_eq!(CategoryFilter::from_tag(FULL_TIME).to_string(), "full-time");
    }
}
