//! Drink Menu App
//!
//! Root component: builds the owned state, starts the load, lays out the page.

use leptos::prelude::*;

use crate::commands;
use crate::components::{DrinkGrid, DrinkModal, NavBar};
use crate::config::AppConfig;
use crate::context::AppContext;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new(AppConfig::default());

    // Provide context to all children
    provide_context(ctx);
    provide_context(ctx.store());

    ctx.init();

    commands::bind_global_keydown(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            ctx.close_overlay();
        }
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1 class="app-title">"Secret Menu"</h1>
                <NavBar />
            </header>

            <main id="drinks-container" class="main-content">
                <DrinkGrid />
            </main>

            <DrinkModal />
        </div>
    }
}
