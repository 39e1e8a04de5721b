//! Debounced search input.

use wasm_debounce::Debouncer;
use web_sys::HtmlInputElement;

use super::listen;
use crate::filter::SearchQuery;
use crate::store::{store_set_search_query, AppStore};

/// Update the search query once typing pauses for `delay_ms`.
///
/// Each keystroke restarts the timer; only the last one applies.
pub fn init_search(input: HtmlInputElement, store: AppStore, delay_ms: u32) {
    let debouncer = Debouncer::with_timeout(delay_ms);
    let field = input.clone();

    listen(&input, "input", move |_ev: web_sys::Event| {
        let field = field.clone();
        debouncer.call(move || {
            let query = SearchQuery::new(&field.value());
            log::debug!("[SEARCH] Query {:?}", query.as_str());
            store_set_search_query(&store, query);
        });
    });
}
