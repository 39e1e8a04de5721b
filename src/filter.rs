//! Filter Engine
//!
//! Category + free-text filtering. Pure: the result depends only on the
//! items, the active category and the query.

use crate::models::{Category, MenuItem};

/// Normalized search input: trimmed and lowercased. Empty means no filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery(String);

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Substring match on name, description or any tag (case-insensitive)
pub fn matches_search(item: &MenuItem, query: &SearchQuery) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.as_str();
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(&item.name)
        || item.description.as_deref().map_or(false, contains)
        || item.tags().iter().any(|tag| contains(tag.as_str()))
}

/// Items matching both the category and the query, in source order
pub fn filter_items<'a>(
    items: &'a [MenuItem],
    category: &Category,
    query: &SearchQuery,
) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| category.matches(item) && matches_search(item, query))
        .collect()
}
