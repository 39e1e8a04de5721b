//! Menu Card Component

use leptos::prelude::*;

use crate::render::CardView;

#[component]
pub fn MenuCard(card: CardView) -> impl IntoView {
    let CardView { name, emoji, price, description, tags } = card;

    view! {
        <div class="card">
            <div class="card-content">
                <div class="card-header">
                    <h3 class="card-title">
                        {name}
                        {emoji.map(|e| view! { " " <span class="card-emoji">{e}</span> })}
                    </h3>
                    <span class="card-price">{price}</span>
                </div>
                {description.map(|d| view! { <p class="card-description">{d}</p> })}
                {(!tags.is_empty()).then(|| view! {
                    <ul class="card-tags">
                        {tags.into_iter().map(|tag| view! { <li class="tag">{tag}</li> }).collect_view()}
                    </ul>
                })}
            </div>
        </div>
    }
}
