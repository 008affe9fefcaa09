//! Drink Modal Component
//!
//! The single detail overlay. Selecting another drink swaps its body in
//! place; backdrop click, the close controls and Escape all dismiss it.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::commands;
use crate::components::{DrinkImage, FavoriteButton};
use crate::context::AppContext;
use crate::models::{category_label, Item};
use crate::overlay::Overlay;
use crate::store::{use_app_store, AppStateStoreFields};

/// Detail content for one drink
#[component]
fn ModalBody(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let placeholder_size = ctx.config().modal_placeholder;
    let category = category_label(&item.category);

    view! {
        <div class="modal-image-wrapper">
            <DrinkImage
                src=item.image.clone()
                name=item.name.clone()
                img_class="modal-image"
                size=placeholder_size
            />
            <button class="modal-close-btn" on:click=move |_| ctx.close_overlay()>
                <i class="fas fa-times"></i>
            </button>
        </div>

        <div class="modal-body">
            <div class="modal-header">
                <div class="modal-title-group">
                    <h2 class="modal-title">{item.name.clone()}</h2>
                    <span class="modal-category">{category}</span>
                </div>
                <FavoriteButton item_id=item.id button_class="modal-favorite-btn" />
            </div>

            <p class="modal-description">{item.description.clone()}</p>

            <div class="modal-section">
                <h3 class="modal-section-title">
                    <i class="fas fa-list-ul"></i>
                    "Ingredients"
                </h3>
                <ul class="ingredients-list">
                    {item.ingredients
                        .iter()
                        .map(|ingredient| view! { <li>{ingredient.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>

            <div class="modal-section">
                <h3 class="modal-section-title">
                    <i class="fas fa-clipboard-list"></i>
                    "How to Order"
                </h3>
                <div class="instructions-box">
                    <p class="instructions-text">{item.instructions.clone()}</p>
                </div>
            </div>

            <button class="modal-action-btn" on:click=move |_| ctx.close_overlay()>
                "Got it!"
            </button>
        </div>
    }
}

#[component]
pub fn DrinkModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let entrance_delay = ctx.config().entrance_delay_ms;

    let is_open = Memo::new(move |_| store.overlay().with(Overlay::is_open));
    let (entered, set_entered) = signal(false);
    // Pending entrance timer; dropping it cancels the callback
    let entrance = StoredValue::new_local(None::<Timeout>);

    // Scroll lock follows open/closed; the entrance scale-in is cosmetic
    Effect::new(move |_| {
        let open = is_open.get();
        commands::set_scroll_locked(open);
        if open {
            entrance.set_value(Some(Timeout::new(entrance_delay, move || set_entered.set(true))));
        } else {
            entrance.set_value(None);
            set_entered.set(false);
        }
    });

    view! {
        <div
            id="drink-modal"
            class=move || if is_open.get() { "modal show" } else { "modal" }
            on:click=move |_| ctx.close_overlay()
        >
            <div class="modal-wrapper">
                <div
                    class="modal-content"
                    style=move || if entered.get() { "transform: scale(1);" } else { "transform: scale(0.95);" }
                    on:click=move |ev| ev.stop_propagation()
                >
                    <div id="modal-inner">
                        {move || {
                            store
                                .overlay()
                                .with(|overlay| overlay.item().cloned())
                                .map(|item| view! { <ModalBody item=item /> })
                        }}
                    </div>
                </div>
            </div>
        </div>
    }
}
