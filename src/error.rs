//! Load Errors
//!
//! Failures reading the embedded menu data. All of them are fatal for
//! rendering: the grid shows a single error message instead of cards.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoadError {
    #[error("menu data not found")]
    Missing,

    #[error("menu data is not an object")]
    NotAnObject,

    #[error("menu data `items` is missing or not a list")]
    ItemsNotAList,

    #[error("menu item #{index} is malformed: {reason}")]
    InvalidItem { index: usize, reason: String },

    #[error("menu item #{index} has an invalid price: {price}")]
    NegativePrice { index: usize, price: f64 },

    #[error("menu data could not be read: {0}")]
    Conversion(String),
}
