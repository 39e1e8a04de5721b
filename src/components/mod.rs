//! UI Components
//!
//! Leptos components mounted into the page's grid and chip hooks.

mod category_chips;
mod menu_card;
mod menu_grid;

pub use category_chips::CategoryChips;
pub use menu_card::MenuCard;
pub use menu_grid::MenuGrid;
