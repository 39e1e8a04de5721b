//! Footer year stamp.

use web_sys::Element;

/// Write the current full year into the footer hook
pub fn stamp_year(year: Option<&Element>) {
    if let Some(el) = year {
        let now = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&now.to_string()));
    }
}
