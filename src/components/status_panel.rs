//! Status Panel Component
//!
//! Full-width replacement for the grid: empty favorites and load failure.

use leptos::prelude::*;

/// Icon, message and a single recovery action
#[component]
pub fn StatusPanel(
    /// Icon classes, e.g. "far fa-heart"
    #[prop(into)] icon: String,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] action_label: String,
    #[prop(into)] on_action: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">
                <i class=icon></i>
            </div>
            <h3 class="empty-state-title">{title}</h3>
            <p class="empty-state-description">{description}</p>
            <button class="empty-state-btn" on:click=move |_| on_action.run(())>
                {action_label}
            </button>
        </div>
    }
}
