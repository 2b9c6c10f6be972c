//! Case-insensitive title filter for the event lists.

/// Something that can be matched by the search box.
pub trait Searchable {
    /// Text the query is matched against.
    fn search_title(&self) -> &str;
}

/// Visibility of every item after applying a query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// One entry per input item, in order.
    pub visible: Vec<bool>,
    pub match_count: usize,
    /// `Found N event(s) matching "q"`, only for a non-empty query over a
    /// non-empty list.
    pub caption: Option<String>,
    /// Whether the clear button is shown.
    pub show_clear: bool,
}

/// Lowercase and trim a raw query.
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Match `query` as a case-insensitive substring of each item's title.
/// An empty query shows everything.
#[must_use]
pub fn filter_items<T: Searchable>(items: &[T], query: &str) -> SearchOutcome {
    let query = normalize_query(query);
    let visible: Vec<bool> = items
        .iter()
        .map(|item| query.is_empty() || item.search_title().to_lowercase().contains(&query))
        .collect();
    let match_count = visible.iter().filter(|v| **v).count();
    let caption = (!query.is_empty() && !items.is_empty())
        .then(|| format!("Found {match_count} event(s) matching \"{query}\""));

    SearchOutcome {
        visible,
        match_count,
        caption,
        show_clear: !query.is_empty(),
    }
}
