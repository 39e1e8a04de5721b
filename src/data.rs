//! Menu Data Source
//!
//! Reads the `window.MENU_DATA` object embedded in the page and the optional
//! `window.MENU_CONFIG` override.

use serde::de::DeserializeOwned;
use serde_json::Value;
use wasm_bindgen::JsValue;

use crate::config::MenuConfig;
use crate::error::LoadError;
use crate::models::MenuItem;

const MENU_DATA_GLOBAL: &str = "MENU_DATA";
const MENU_CONFIG_GLOBAL: &str = "MENU_CONFIG";

/// Validate a `{ items: [...] }` value into menu items
pub fn parse_menu_data(value: Value) -> Result<Vec<MenuItem>, LoadError> {
    let mut data = match value {
        Value::Null => return Err(LoadError::Missing),
        Value::Object(map) => map,
        _ => return Err(LoadError::NotAnObject),
    };

    let Some(Value::Array(raw_items)) = data.remove("items") else {
        return Err(LoadError::ItemsNotAList);
    };

    raw_items
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_item(index, raw))
        .collect()
}

fn parse_item(index: usize, raw: Value) -> Result<MenuItem, LoadError> {
    let item: MenuItem = serde_json::from_value(raw).map_err(|e| LoadError::InvalidItem {
        index,
        reason: e.to_string(),
    })?;

    if !item.price.is_finite() || item.price < 0.0 {
        return Err(LoadError::NegativePrice {
            index,
            price: item.price,
        });
    }
    Ok(item)
}

/// Read a global off `window`; `None` when absent, `undefined` or `null`
fn read_global<T: DeserializeOwned>(name: &str) -> Result<Option<T>, LoadError> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let raw = js_sys::Reflect::get(&window, &JsValue::from_str(name))
        .map_err(|_| LoadError::Conversion(format!("cannot read window.{name}")))?;
    if raw.is_undefined() || raw.is_null() {
        return Ok(None);
    }
    serde_wasm_bindgen::from_value(raw)
        .map(Some)
        .map_err(|e| LoadError::Conversion(e.to_string()))
}

/// Load the menu items embedded in the page
pub fn load_from_window() -> Result<Vec<MenuItem>, LoadError> {
    let value: Value = read_global(MENU_DATA_GLOBAL)?.ok_or(LoadError::Missing)?;
    parse_menu_data(value)
}

/// Page configuration, falling back to defaults on absence or error
pub fn config_from_window() -> MenuConfig {
    match read_global::<MenuConfig>(MENU_CONFIG_GLOBAL) {
        Ok(Some(config)) => config,
        Ok(None) => MenuConfig::default(),
        Err(e) => {
            log::warn!("[MENU] Ignoring malformed {MENU_CONFIG_GLOBAL}: {e}");
            MenuConfig::default()
        }
    }
}
