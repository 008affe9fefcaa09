//! Drink Grid Component
//!
//! Main area: the card grid, or the empty/error panel in its place.

use leptos::prelude::*;

use crate::components::{DrinkCard, StatusPanel};
use crate::context::AppContext;
use crate::store::{store_view_content, use_app_store};
use crate::view_model::{Filter, ViewContent};

#[component]
pub fn DrinkGrid() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    // Equal content (e.g. a toggle outside the favorites view) does not re-render
    let content = Memo::new(move |_| store_view_content(&store));

    // Each change builds the new subtree before it replaces the old one
    move || match content.get() {
        ViewContent::Pending => ().into_any(),
        ViewContent::Failed => view! {
            <StatusPanel
                icon="fas fa-exclamation-triangle"
                title="Oops! Something went wrong"
                description="We couldn't load the secret menu drinks. Please try refreshing the page."
                action_label="Refresh Page"
                on_action=Callback::new(move |_| ctx.reload_page())
            />
        }
        .into_any(),
        ViewContent::NoFavorites => view! {
            <StatusPanel
                icon="far fa-heart"
                title="No favorites yet"
                description="Start adding drinks to your favorites by tapping the heart icon!"
                action_label="Browse Drinks"
                on_action=Callback::new(move |_| ctx.set_filter(Filter::All))
            />
        }
        .into_any(),
        ViewContent::Grid(items) => view! {
            <div class="drinks-grid">
                {items
                    .into_iter()
                    .map(|item| view! { <DrinkCard item=item /> })
                    .collect_view()}
            </div>
        }
        .into_any(),
    }
}
