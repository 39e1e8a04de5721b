//! Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the chips only
//! track `categories`/`active_category`, so a search does not re-render them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::categories::{extract_categories, is_selectable};
use crate::filter::SearchQuery;
use crate::models::{Category, MenuItem};

/// Menu page state. `items` and `categories` are fixed after load.
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items in source order
    pub items: Vec<MenuItem>,
    /// "All" sentinel followed by the sorted distinct categories
    pub categories: Vec<Category>,
    /// Always a member of `categories`
    pub active_category: Category,
    pub search_query: SearchQuery,
}

impl AppState {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let categories = extract_categories(&items);
        Self {
            items,
            categories,
            active_category: Category::All,
            search_query: SearchQuery::default(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Set the active category, touching only `active_category`
pub fn store_select_category(store: &AppStore, category: Category) -> bool {
    let known = store.categories().with(|categories| is_selectable(categories, &category));
    if !known {
        log::warn!("[MENU] Ignoring unknown category {:?}", category);
        return false;
    }
    store.active_category().set(category);
    true
}

/// Replace the search query, touching only `search_query`
pub fn store_set_search_query(store: &AppStore, query: SearchQuery) {
    store.search_query().set(query);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::filter_items;

    fn sample_store() -> AppStore {
        Store::new(AppState::new(vec![
            MenuItem::new("Pizza", 45.0, "Pratos").with_tags(&["italiana"]),
            MenuItem::new("Suco", 8.5, "Bebidas"),
        ]))
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new(vec![
            MenuItem::new("Pizza", 45.0, "Pratos"),
            MenuItem::new("Suco", 8.5, "Bebidas"),
        ]);
        assert_eq!(state.active_category, Category::All);
        assert!(state.search_query.is_empty());
        assert_eq!(
            state.categories,
            vec![Category::All, Category::named("Bebidas"), Category::named("Pratos")]
        );
        assert_eq!(
            filter_items(&state.items, &state.active_category, &state.search_query).len(),
            2
        );
    }

    #[test]
    fn test_select_category_keeps_items_and_query() {
        let store = sample_store();
        store_set_search_query(&store, SearchQuery::new("su"));
        let items_before = store.items().get_untracked();

        assert!(store_select_category(&store, Category::named("Bebidas")));

        assert_eq!(store.items().get_untracked(), items_before);
        assert_eq!(store.search_query().get_untracked(), SearchQuery::new("su"));
        assert_eq!(store.active_category().get_untracked(), Category::named("Bebidas"));
    }

    #[test]
    fn test_select_unknown_category_is_rejected() {
        let store = sample_store();

        assert!(store_select_category(&store, Category::named("Pratos")));
        assert!(!store_select_category(&store, Category::named("Lanches")));

        assert_eq!(store.active_category().get_untracked(), Category::named("Pratos"));
    }

    #[test]
    fn test_search_query_is_normalized_and_independent() {
        let store = sample_store();

        store_set_search_query(&store, SearchQuery::new(" ITAL "));

        assert_eq!(store.search_query().get_untracked().as_str(), "ital");
        assert_eq!(store.active_category().get_untracked(), Category::All);
        assert_eq!(store.items().with_untracked(|items| items.len()), 2);
    }
}
