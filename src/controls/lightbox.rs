//! Logo Lightbox
//!
//! Clicking a logo opens an overlay with the enlarged image. The close
//! control, a click on the backdrop, or Escape closes it; the image source
//! is cleared once the close animation has run.

use std::rc::Rc;

use wasm_bindgen::JsValue;
use wasm_debounce::{Debouncer, Scheduler, TimeoutScheduler};
use web_sys::{HtmlElement, HtmlImageElement};

use super::{listen, PageHooks};
use crate::config::MenuConfig;

/// Image to show for a clicked logo
pub fn enlarged_source(configured: Option<&str>, clicked: &str) -> String {
    configured
        .filter(|src| !src.is_empty())
        .unwrap_or(clicked)
        .to_string()
}

/// What the lightbox drives on the page
pub trait LightboxView {
    fn is_shown(&self) -> bool;
    /// Set the image and reveal the overlay
    fn show(&self, src: &str);
    fn hide(&self);
    fn clear_image(&self);
}

/// Overlay element toggled by a CSS class, with its `<img>`
#[derive(Clone)]
pub struct DomLightbox {
    overlay: HtmlElement,
    image: HtmlImageElement,
    open_class: String,
}

impl LightboxView for DomLightbox {
    fn is_shown(&self) -> bool {
        self.overlay.class_list().contains(&self.open_class)
    }

    fn show(&self, src: &str) {
        self.image.set_src(src);
        let _ = self.overlay.class_list().add_1(&self.open_class);
        set_body_overflow(Some("hidden"));
    }

    fn hide(&self) {
        let _ = self.overlay.class_list().remove_1(&self.open_class);
        set_body_overflow(None);
    }

    fn clear_image(&self) {
        let _ = self.image.remove_attribute("src");
    }
}

/// Open/close logic with a delayed image clear
pub struct Lightbox<V, S: Scheduler = TimeoutScheduler> {
    view: V,
    clear: Debouncer<S>,
}

impl<V: LightboxView + Clone + 'static, S: Scheduler> Lightbox<V, S> {
    pub fn new(view: V, scheduler: S, clear_delay_ms: u32) -> Self {
        Self {
            view,
            clear: Debouncer::new(scheduler, clear_delay_ms),
        }
    }

    pub fn open(&self, src: &str) {
        // A clear scheduled by an earlier close would blank this image
        self.clear.cancel();
        self.view.show(src);
        log::debug!("[LIGHTBOX] Opened {src}");
    }

    /// Returns false when the overlay was not open
    pub fn close(&self) -> bool {
        if !self.view.is_shown() {
            return false;
        }
        self.view.hide();

        let view = self.view.clone();
        self.clear.call(move || view.clear_image());
        log::debug!("[LIGHTBOX] Closed");
        true
    }
}

fn set_body_overflow(value: Option<&str>) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let style = body.style();
    let _ = match value {
        Some(v) => style.set_property("overflow", v),
        None => style.remove_property("overflow").map(|_| ()),
    };
}

/// Wire both logos, the close control, the backdrop and Escape.
///
/// Needs the overlay and its image; without them the lightbox stays off.
pub fn init_lightbox(hooks: &PageHooks, config: &MenuConfig) {
    let (Some(overlay), Some(image)) = (hooks.lightbox.clone(), hooks.lightbox_image.clone()) else {
        return;
    };
    let backdrop: JsValue = overlay.clone().into();
    let view = DomLightbox {
        overlay: overlay.clone(),
        image,
        open_class: config.lightbox_open_class.clone(),
    };
    let lightbox = Rc::new(Lightbox::new(
        view,
        TimeoutScheduler,
        config.lightbox_clear_delay_ms,
    ));

    // One handler per logo
    for logo in [hooks.header_logo.clone(), hooks.footer_logo.clone()].into_iter().flatten() {
        let lightbox = lightbox.clone();
        let configured = config.enlarged_logo_src.clone();
        let clicked = logo.clone();
        listen(&logo, "click", move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            lightbox.open(&enlarged_source(configured.as_deref(), &clicked.src()));
        });
    }

    if let Some(close) = hooks.close_lightbox.clone() {
        let lightbox = lightbox.clone();
        listen(&close, "click", move |_ev: web_sys::MouseEvent| {
            lightbox.close();
        });
    }

    {
        let lightbox = lightbox.clone();
        listen(&overlay, "click", move |ev: web_sys::MouseEvent| {
            let on_backdrop = ev
                .target()
                .map_or(false, |target| AsRef::<JsValue>::as_ref(&target) == &backdrop);
            if on_backdrop {
                lightbox.close();
            }
        });
    }

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        listen(&document, "keydown", move |ev: web_sys::KeyboardEvent| {
            if ev.key() == "Escape" {
                lightbox.close();
            }
        });
    }
}
