//! Menu Grid Component
//!
//! Cards for the filtered items, the empty state, or the load error.

use leptos::prelude::*;
use web_sys::Element;

use crate::components::MenuCard;
use crate::render::GridView;

/// Inline styles so the error stays visible whatever the page CSS does
const ERROR_STYLE: &str = "padding: 20px; background: #ffebee; color: #c62828; \
    border-radius: 4px; text-align: center; grid-column: 1 / -1;";

/// Item grid.
///
/// When the page has its own empty-state element, it is shown/hidden here;
/// otherwise an inline placeholder is rendered.
#[component]
pub fn MenuGrid(
    #[prop(into)] grid: Signal<GridView>,
    empty_state: Option<Element>,
    empty_message: String,
) -> impl IntoView {
    let has_empty_hook = empty_state.is_some();

    Effect::new(move |_| {
        let show = grid.with(GridView::is_empty_state);
        if let Some(el) = &empty_state {
            let classes = el.class_list();
            let _ = if show {
                classes.remove_1("hidden")
            } else {
                classes.add_1("hidden")
            };
        }
    });

    view! {
        {move || match grid.get() {
            GridView::Cards(cards) => cards
                .into_iter()
                .map(|card| view! { <MenuCard card=card /> })
                .collect_view()
                .into_any(),
            GridView::Empty if has_empty_hook => ().into_any(),
            GridView::Empty => view! {
                <p class="empty-state">{empty_message.clone()}</p>
            }.into_any(),
            GridView::Error(message) => view! {
                <div class="error-message" style=ERROR_STYLE>{message}</div>
            }.into_any(),
        }}
    }
}
