//! Category Chips Component
//!
//! One button per category; the active one carries the `active` class.

use leptos::prelude::*;

use crate::models::Category;
use crate::render::{chip_views, ChipView};
use crate::store::{AppStateStoreFields, AppStore};

/// Category chip list, fully re-rendered when the categories or the
/// active category change
#[component]
pub fn CategoryChips(
    store: AppStore,
    all_label: String,
    #[prop(into)] on_select: Callback<Category>,
) -> impl IntoView {
    let chips = move || {
        chip_views(
            &store.categories().read(),
            &store.active_category().read(),
            &all_label,
        )
    };

    view! {
        {move || chips().into_iter().map(|chip| {
            let ChipView { category, label, active } = chip;
            let data_category = label.clone();
            view! {
                <button
                    class=if active { "chip active" } else { "chip" }
                    data-category=data_category
                    on:click=move |_| on_select.run(category.clone())
                >
                    {label}
                </button>
            }
        }).collect_view()}
    }
}
