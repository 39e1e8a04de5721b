//! Category Extraction
//!
//! Derives the chip list from the loaded items.

use std::collections::BTreeSet;

use crate::models::{Category, MenuItem};

/// The "All" sentinel followed by the distinct item categories, sorted
pub fn extract_categories(items: &[MenuItem]) -> Vec<Category> {
    let distinct: BTreeSet<&str> = items.iter().map(|item| item.category.as_str()).collect();

    std::iter::once(Category::All)
        .chain(distinct.into_iter().map(Category::named))
        .collect()
}

/// Whether `category` may become the active one
pub fn is_selectable(categories: &[Category], category: &Category) -> bool {
    categories.contains(category)
}
