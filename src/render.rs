//! Render View Models
//!
//! Pure descriptions of what the chips and the grid show. Components only
//! map these to DOM, so each render is a full replacement of its region.

use crate::config::MenuConfig;
use crate::error::LoadError;
use crate::filter::filter_items;
use crate::models::{Category, MenuItem};
use crate::price::format_price;
use crate::store::AppState;

/// One category chip
#[derive(Debug, Clone, PartialEq)]
pub struct ChipView {
    pub category: Category,
    pub label: String,
    pub active: bool,
}

pub fn chip_views(categories: &[Category], active: &Category, all_label: &str) -> Vec<ChipView> {
    categories
        .iter()
        .map(|category| ChipView {
            category: category.clone(),
            label: category.label(all_label).to_string(),
            active: category == active,
        })
        .collect()
}

/// One menu card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub emoji: Option<String>,
    pub price: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
}

impl CardView {
    pub fn from_item(item: &MenuItem, currency_symbol: &str) -> Self {
        Self {
            name: item.name.clone(),
            emoji: item.emoji.clone().filter(|e| !e.trim().is_empty()),
            price: format_price(item.price, currency_symbol),
            description: item.description.clone().filter(|d| !d.trim().is_empty()),
            tags: item.tags().to_vec(),
        }
    }
}

/// Contents of the item grid
#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    Cards(Vec<CardView>),
    /// Nothing matched: show the empty-state indicator, no cards
    Empty,
    /// Menu data failed to load: a single error message, no cards
    Error(String),
}

impl GridView {
    pub fn from_items(items: &[&MenuItem], currency_symbol: &str) -> Self {
        if items.is_empty() {
            return GridView::Empty;
        }
        GridView::Cards(
            items
                .iter()
                .map(|item| CardView::from_item(item, currency_symbol))
                .collect(),
        )
    }

    /// Grid for a load outcome: the current state's cards, or the
    /// configured error message when the data could not be loaded
    pub fn for_load(loaded: &Result<AppState, LoadError>, config: &MenuConfig) -> Self {
        match loaded {
            Ok(state) => GridView::from_items(
                &filter_items(&state.items, &state.active_category, &state.search_query),
                &config.currency_symbol,
            ),
            Err(_) => GridView::Error(config.load_error_message.clone()),
        }
    }

    pub fn is_empty_state(&self) -> bool {
        matches!(self, GridView::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::parse_menu_data;
    use crate::filter::SearchQuery;
    use serde_json::json;

    #[test]
    fn test_chips_mark_only_active() {
        let categories = vec![Category::All, Category::named("Bebidas"), Category::named("Pratos")];
        let chips = chip_views(&categories, &Category::named("Bebidas"), "Tudo");

        assert_eq!(chips.len(), 3);
        assert_eq!(chips[0].label, "Tudo");
        assert_eq!(
            chips.iter().filter(|c| c.active).map(|c| c.label.as_str()).collect::<Vec<_>>(),
            vec!["Bebidas"]
        );
    }

    #[test]
    fn test_card_fields() {
        let item = MenuItem::new("Pizza", 12.5, "Pratos")
            .with_emoji("🍕")
            .with_description("Margherita")
            .with_tags(&["italiana", "forno"]);

        let card = CardView::from_item(&item, "R$");

        assert_eq!(card.name, "Pizza");
        assert_eq!(card.emoji.as_deref(), Some("🍕"));
        assert_eq!(card.price, "R$ 12,50");
        assert_eq!(card.description.as_deref(), Some("Margherita"));
        assert_eq!(card.tags, vec!["italiana", "forno"]);
    }

    #[test]
    fn test_card_optional_fields_absent() {
        let mut item = MenuItem::new("Suco", 8.0, "Bebidas");
        item.description = Some("  ".to_string());

        let card = CardView::from_item(&item, "R$");

        assert!(card.emoji.is_none());
        assert!(card.description.is_none());
        assert!(card.tags.is_empty());
    }

    #[test]
    fn test_empty_result_renders_empty_state() {
        let items = vec![MenuItem::new("Suco", 8.0, "Bebidas")];
        let filtered = filter_items(&items, &Category::All, &SearchQuery::new("pizza"));

        let grid = GridView::from_items(&filtered, "R$");

        assert_eq!(grid, GridView::Empty);
    }

    #[test]
    fn test_cards_follow_filter_order() {
        let items = vec![
            MenuItem::new("Pizza", 45.0, "Pratos"),
            MenuItem::new("Suco", 8.0, "Bebidas"),
        ];
        let filtered = filter_items(&items, &Category::All, &SearchQuery::default());

        match GridView::from_items(&filtered, "R$") {
            GridView::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].name, "Pizza");
                assert_eq!(cards[1].name, "Suco");
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_source_renders_single_error() {
        let config = MenuConfig::default();
        let loaded = parse_menu_data(json!({ "items": "x" })).map(AppState::new);

        let grid = GridView::for_load(&loaded, &config);

        assert_eq!(grid, GridView::Error(config.load_error_message.clone()));
        assert!(!grid.is_empty_state());
    }

    #[test]
    fn test_loaded_source_renders_all_cards() {
        let config = MenuConfig::default();
        let loaded = parse_menu_data(json!({
            "items": [
                { "name": "Pizza", "price": 12.5, "category": "Pratos" },
                { "name": "Suco", "price": 8, "category": "Bebidas" }
            ]
        }))
        .map(AppState::new);

        match GridView::for_load(&loaded, &config) {
            GridView::Cards(cards) => {
                assert_eq!(cards.len(), 2);
                assert_eq!(cards[0].price, "R$ 12,50");
            }
            other => panic!("expected cards, got {other:?}"),
        }
    }

    #[test]
    fn test_loaded_empty_list_renders_empty_state() {
        let loaded = parse_menu_data(json!({ "items": [] })).map(AppState::new);
        assert_eq!(GridView::for_load(&loaded, &MenuConfig::default()), GridView::Empty);
    }
}
