//! Favorite Button Component
//!
//! Heart toggle shared by the grid card and the detail overlay.

use leptos::prelude::*;

use crate::context::AppContext;

/// Heart toggle for one item
///
/// Filled icon (`fas`) when favorited, outline (`far`) otherwise. Both
/// instances for the same id read the same memo, so they stay in sync.
/// The click never reaches the enclosing card.
#[component]
pub fn FavoriteButton(
    item_id: u32,
    #[prop(into)] button_class: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let is_favorite = ctx.is_favorite(item_id);

    let class = move || {
        if is_favorite.get() {
            format!("{} is-favorite", button_class)
        } else {
            button_class.clone()
        }
    };

    view! {
        <button
            class=class
            data-drink-id=item_id.to_string()
            on:click=move |ev| {
                ev.stop_propagation();
                ctx.toggle_favorite(item_id);
            }
        >
            <i class=move || if is_favorite.get() { "fas fa-heart" } else { "far fa-heart" }></i>
        </button>
    }
}
