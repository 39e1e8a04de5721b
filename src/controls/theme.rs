//! Light/dark theme toggle.
//!
//! The choice lives in one `localStorage` key and is applied as a
//! `data-theme` attribute on `<html>`. Independent of the menu state.

use web_sys::HtmlElement;

use super::listen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Toggle glyph: shows the theme a click switches to
    pub fn glyph(self) -> &'static str {
        match self {
            Theme::Dark => "☀️",
            Theme::Light => "🌙",
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Stored theme, `Light` when nothing valid is stored
pub fn stored_theme(key: &str) -> Theme {
    storage()
        .and_then(|s| s.get_item(key).ok().flatten())
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn save_theme(key: &str, theme: Theme) {
    if let Some(storage) = storage() {
        if storage.set_item(key, theme.as_str()).is_err() {
            log::warn!("[THEME] Could not persist theme preference");
        }
    }
}

/// Theme currently applied to `<html>`
pub fn current_theme() -> Theme {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
        .and_then(|el| el.get_attribute("data-theme"))
        .and_then(|value| Theme::parse(&value))
        .unwrap_or_default()
}

pub fn apply_theme(theme: Theme) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = el.set_attribute("data-theme", theme.as_str());
    }
}

/// Apply the stored theme and, when the toggle exists, wire its clicks
pub fn init_theme(toggle: Option<HtmlElement>, storage_key: &str) {
    let initial = stored_theme(storage_key);
    apply_theme(initial);

    let Some(toggle) = toggle else {
        return;
    };
    toggle.set_text_content(Some(initial.glyph()));

    let key = storage_key.to_string();
    let button = toggle.clone();
    listen(&toggle, "click", move |_ev: web_sys::MouseEvent| {
        let next = current_theme().toggled();
        apply_theme(next);
        button.set_text_content(Some(next.glyph()));
        save_theme(&key, next);
        log::debug!("[THEME] Switched to {}", next.as_str());
    });
}
