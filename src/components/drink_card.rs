//! Drink Card Component
//!
//! One tile in the grid. Clicking anywhere but the heart opens the overlay.

use leptos::prelude::*;

use crate::components::{DrinkImage, FavoriteButton};
use crate::context::AppContext;
use crate::models::{category_label, Item};

#[component]
pub fn DrinkCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let placeholder_size = ctx.config().card_placeholder;

    let id = item.id;
    let name = item.name.clone();
    let description = item.description.clone();
    let category = category_label(&item.category);
    let image = item.image.clone();

    view! {
        <div class="drink-card" on:click=move |_| ctx.open_item(item.clone())>
            <div class="drink-card-image-wrapper">
                <DrinkImage
                    src=image
                    name=name.clone()
                    img_class="drink-card-image"
                    size=placeholder_size
                />
                <FavoriteButton item_id=id button_class="favorite-btn" />
            </div>
            <div class="drink-card-content">
                <h3 class="drink-card-title">{name}</h3>
                <p class="drink-card-description">{description}</p>
                <div class="drink-card-footer">
                    <span class="drink-category">{category}</span>
                    <button class="view-recipe-btn">"View Recipe"</button>
                </div>
            </div>
        </div>
    }
}
