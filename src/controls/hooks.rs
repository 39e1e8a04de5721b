//! DOM Hooks
//!
//! Named anchors in the host page, looked up once at startup.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, EventTarget, HtmlElement, HtmlImageElement, HtmlInputElement};

#[derive(Clone, Default)]
pub struct PageHooks {
    pub search_input: Option<HtmlInputElement>,
    pub category_chips: Option<HtmlElement>,
    pub menu_grid: Option<HtmlElement>,
    pub empty_state: Option<Element>,
    pub theme_toggle: Option<HtmlElement>,
    pub lightbox: Option<HtmlElement>,
    pub lightbox_image: Option<HtmlImageElement>,
    pub header_logo: Option<HtmlImageElement>,
    pub footer_logo: Option<HtmlImageElement>,
    pub close_lightbox: Option<Element>,
    pub year: Option<Element>,
}

impl PageHooks {
    pub fn collect(document: &Document) -> Self {
        let hooks = Self {
            search_input: by_id(document, "searchInput"),
            category_chips: by_id(document, "categoryChips"),
            menu_grid: by_id(document, "menuGrid"),
            empty_state: by_id(document, "emptyState"),
            theme_toggle: by_id(document, "themeToggle"),
            lightbox: by_id(document, "logoLightbox"),
            lightbox_image: by_id(document, "lightboxImg").or_else(|| by_id(document, "enlargedLogo")),
            header_logo: by_id(document, "headerLogo"),
            footer_logo: by_id(document, "footerLogo"),
            close_lightbox: document.query_selector(".close-lightbox").ok().flatten(),
            year: by_id(document, "year"),
        };
        hooks.log_missing();
        hooks
    }

    fn log_missing(&self) {
        let present = [
            ("searchInput", self.search_input.is_some()),
            ("categoryChips", self.category_chips.is_some()),
            ("menuGrid", self.menu_grid.is_some()),
            ("emptyState", self.empty_state.is_some()),
            ("themeToggle", self.theme_toggle.is_some()),
            ("logoLightbox", self.lightbox.is_some()),
            ("lightboxImg", self.lightbox_image.is_some()),
            ("headerLogo", self.header_logo.is_some()),
            ("footerLogo", self.footer_logo.is_some()),
            (".close-lightbox", self.close_lightbox.is_some()),
            ("year", self.year.is_some()),
        ];
        for (name, found) in present {
            if !found {
                log::debug!("[MENU] Hook {name} not found, feature disabled");
            }
        }
    }
}

/// Element by id, if present and of the expected type
fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    document.get_element_by_id(id)?.dyn_into::<T>().ok()
}

/// Attach a listener for the page's lifetime
pub(crate) fn listen<E, F>(target: &EventTarget, event: &str, handler: F)
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::<dyn FnMut(E)>::new(handler);
    if target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("[MENU] Could not attach {event} handler");
    }
    closure.forget();
}
