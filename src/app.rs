//! Menu Page App
//!
//! Startup: reads the page hooks and the embedded data, then mounts the
//! chips and grid and wires the page controls.

use leptos::mount::mount_to;
use leptos::prelude::*;
use reactive_stores::Store;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::{CategoryChips, MenuGrid};
use crate::config::MenuConfig;
use crate::controls::{init_lightbox, init_search, init_theme, stamp_year, PageHooks};
use crate::data;
use crate::filter::filter_items;
use crate::models::Category;
use crate::render::GridView;
use crate::store::{store_select_category, AppState, AppStateStoreFields, AppStore};

/// Run once the document has been parsed
pub fn run() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("[MENU] No document available");
        return;
    };
    if document.ready_state() == "loading" {
        crate::controls::listen(&document, "DOMContentLoaded", |_ev: web_sys::Event| start());
    } else {
        start();
    }
}

fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // Root owner for the stores and effects of every mounted region
    let owner = Owner::new();
    owner.set();

    let config = data::config_from_window();
    let hooks = PageHooks::collect(&document);

    init_theme(hooks.theme_toggle.clone(), &config.theme_storage_key);
    stamp_year(hooks.year.as_ref());
    init_lightbox(&hooks, &config);

    let loaded = data::load_from_window().map(AppState::new);
    if let Err(err) = &loaded {
        log::error!("[MENU] Failed to load menu data: {err}");
        show_load_error(&hooks, &config, GridView::for_load(&loaded, &config));
    }
    if let Ok(state) = loaded {
        mount_menu(state, &hooks, &config);
    }
}

fn mount_menu(state: AppState, hooks: &PageHooks, config: &MenuConfig) {
    log::info!(
        "[MENU] Loaded {} items in {} categories",
        state.items.len(),
        state.categories.len() - 1
    );
    let store = Store::new(state);

    if let Some(container) = hooks.category_chips.clone() {
        let all_label = config.all_label.clone();
        let scroll_target = config.scroll_target_selector.clone();
        let on_select = Callback::new(move |category: Category| {
            if store_select_category(&store, category) {
                scroll_into_view(&scroll_target);
            }
        });
        replace_contents(container, move || {
            view! { <CategoryChips store=store all_label=all_label on_select=on_select /> }
        });
    }

    if let Some(container) = hooks.menu_grid.clone() {
        let symbol = config.currency_symbol.clone();
        let grid = Signal::derive(move || grid_view(&store, &symbol));
        mount_grid(container, grid, hooks, config);
    }

    if let Some(input) = hooks.search_input.clone() {
        init_search(input, store, config.search_debounce_ms);
    }
}

/// Grid contents for the current state
fn grid_view(store: &AppStore, currency_symbol: &str) -> GridView {
    let items = store.items().read();
    let category = store.active_category().read();
    let query = store.search_query().read();
    GridView::from_items(&filter_items(&items, &category, &query), currency_symbol)
}

fn show_load_error(hooks: &PageHooks, config: &MenuConfig, error_view: GridView) {
    let Some(container) = hooks.menu_grid.clone() else {
        return;
    };
    let grid = Signal::derive(move || error_view.clone());
    mount_grid(container, grid, hooks, config);
}

fn mount_grid(container: HtmlElement, grid: Signal<GridView>, hooks: &PageHooks, config: &MenuConfig) {
    let empty_state = hooks.empty_state.clone();
    let empty_message = config.empty_state_message.clone();
    replace_contents(container, move || {
        view! { <MenuGrid grid=grid empty_state=empty_state empty_message=empty_message /> }
    });
}

/// Mount a view in place of whatever the host element contained
fn replace_contents<F, N>(host: HtmlElement, view: F)
where
    F: FnOnce() -> N + 'static,
    N: IntoView,
{
    host.set_inner_html("");
    mount_to(host, view).forget();
}

fn scroll_into_view(selector: &str) {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(selector).ok().flatten());
    if let Some(el) = target {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
