//! Drink Image Component
//!
//! Image that falls back to a generated placeholder when it fails to load.

use leptos::prelude::*;

use crate::models::placeholder_image_url;

#[component]
pub fn DrinkImage(
    #[prop(into)] src: String,
    #[prop(into)] name: String,
    #[prop(into)] img_class: String,
    /// Placeholder size (width, height)
    size: (u32, u32),
) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let placeholder = placeholder_image_url(&name, size);
    let current_src = move || if failed.get() { placeholder.clone() } else { src.clone() };

    let log_name = name.clone();

    view! {
        <img
            src=current_src
            alt=name
            class=img_class
            on:error=move |_| {
                // Swap once; a failing placeholder must not loop
                if !failed.get_untracked() {
                    log::debug!("[IMAGE] Falling back to placeholder for {}", log_name);
                    set_failed.set(true);
                }
            }
        />
    }
}
