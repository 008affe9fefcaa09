//! Navigation Bar Component
//!
//! "All", "Favorites" and one chip per category. The highlighted entry is
//! whichever equals the active filter.

use leptos::prelude::*;

use crate::catalog::categories;
use crate::context::AppContext;
use crate::models::category_label;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::view_model::Filter;

/// Fixed entries: (filter key, icon classes, label)
const NAV_ENTRIES: &[(&str, &str, &str)] = &[
    ("all", "fas fa-home", "All Drinks"),
    ("favorites", "fas fa-heart", "Favorites"),
];

fn nav_class(active: bool) -> &'static str {
    if active { "nav-item active" } else { "nav-item" }
}

fn chip_class(active: bool) -> &'static str {
    if active { "category-chip active" } else { "category-chip" }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let category_list = Memo::new(move |_| store.catalog().with(|catalog| categories(catalog.items())));
    let is_active = move |filter: &Filter| store.filter().with(|active| active == filter);

    view! {
        <nav class="nav-bar">
            {NAV_ENTRIES
                .iter()
                .map(|&(key, icon, label)| {
                    let filter = Filter::parse(key);
                    let nav_filter = filter.clone();
                    view! {
                        <button
                            class=move || nav_class(is_active(&nav_filter))
                            data-nav=key
                            on:click=move |_| ctx.set_filter(filter.clone())
                        >
                            <i class=icon></i>
                            <span>{label}</span>
                        </button>
                    }
                })
                .collect_view()}

            <div class="category-filters">
                <For
                    each=move || category_list.get()
                    key=|category| category.clone()
                    children=move |category| {
                        let filter = Filter::Category(category.clone());
                        let chip_filter = filter.clone();
                        view! {
                            <button
                                class=move || chip_class(is_active(&chip_filter))
                                on:click=move |_| ctx.set_filter(filter.clone())
                            >
                                {category_label(&category)}
                            </button>
                        }
                    }
                />
            </div>
        </nav>
    }
}
