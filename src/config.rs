//! Page Configuration
//!
//! Labels, delays and hook names. Every field has a default; a page may
//! override any of them through the optional `window.MENU_CONFIG` object.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Label of the "no category filter" chip
    pub all_label: String,
    pub currency_symbol: String,
    pub search_debounce_ms: u32,
    /// Delay before the lightbox image source is cleared after closing
    pub lightbox_clear_delay_ms: u32,
    pub theme_storage_key: String,
    pub lightbox_open_class: String,
    /// Image shown when a logo is clicked; `None` shows the clicked logo itself
    pub enlarged_logo_src: Option<String>,
    pub load_error_message: String,
    pub empty_state_message: String,
    pub scroll_target_selector: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            all_label: "Tudo".to_string(),
            currency_symbol: "R$".to_string(),
            search_debounce_ms: wasm_debounce::DEFAULT_DELAY_MS,
            lightbox_clear_delay_ms: 300,
            theme_storage_key: "theme".to_string(),
            lightbox_open_class: "show".to_string(),
            enlarged_logo_src: None,
            load_error_message:
                "Não foi possível carregar o cardápio. Por favor, recarregue a página.".to_string(),
            empty_state_message: "Nenhum item encontrado.".to_string(),
            scroll_target_selector: ".menu-section".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn from_value(value: Value) -> Result<MenuConfig, serde_json::Error> {
        serde_json::from_value(value)
    }

    #[test]
    fn test_defaults() {
        let config = MenuConfig::default();
        assert_eq!(config.all_label, "Tudo");
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.search_debounce_ms, 300);
        assert_eq!(config.lightbox_clear_delay_ms, 300);
        assert_eq!(config.theme_storage_key, "theme");
        assert!(config.enlarged_logo_src.is_none());
        assert_eq!(config.empty_state_message, "Nenhum item encontrado.");
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = from_value(json!({
            "allLabel": "All",
            "searchDebounceMs": 150,
            "enlargedLogoSrc": "logo-large.png",
            "emptyStateMessage": "Nada por aqui."
        }))
        .unwrap();

        assert_eq!(config.all_label, "All");
        assert_eq!(config.search_debounce_ms, 150);
        assert_eq!(config.enlarged_logo_src.as_deref(), Some("logo-large.png"));
        assert_eq!(config.empty_state_message, "Nada por aqui.");
        assert_eq!(config.currency_symbol, "R$");
        assert_eq!(config.scroll_target_selector, ".menu-section");
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(from_value(json!({ "searchDebounceMs": "soon" })).is_err());
    }
}
