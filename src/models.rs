//! Menu Models
//!
//! Data structures matching the embedded `MENU_DATA` source.

use serde::Deserialize;

/// One dish or drink on the menu (immutable after load)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub emoji: Option<String>,
}

impl MenuItem {
    /// Tags as a slice, empty when absent
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
impl MenuItem {
    pub fn new(name: &str, price: f64, category: &str) -> Self {
        Self {
            name: name.to_string(),
            price,
            category: category.to_string(),
            description: None,
            tags: None,
            emoji: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_emoji(mut self, emoji: &str) -> Self {
        self.emoji = Some(emoji.to_string());
        self
    }
}

/// A category chip value.
///
/// `All` is the "no category filter" sentinel and never collides with a
/// real category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Named(String),
}

impl Category {
    pub fn named(name: &str) -> Self {
        Category::Named(name.to_string())
    }

    /// Visible label; the sentinel uses the configured `all_label`
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            Category::All => all_label,
            Category::Named(name) => name,
        }
    }

    /// Exact, case-sensitive match against an item's category
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            Category::All => true,
            Category::Named(name) => item.category == *name,
        }
    }
}
