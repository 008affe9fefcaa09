//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: toggling a
//! favorite only notifies readers of `favorites`, so the grid is rebuilt
//! only when the active filter reads it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::catalog::CatalogState;
use crate::error::AppError;
use crate::favorites::{FavoriteManager, FavoriteSet, FavoriteStorage};
use crate::models::Item;
use crate::overlay::Overlay;
use crate::view_model::{view_content, Filter, ViewContent};

/// The whole page state, owned by the store
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Drink list, set once by the loader
    pub catalog: CatalogState,
    /// Favorited ids
    pub favorites: FavoriteSet,
    /// Active navigation filter
    pub filter: Filter,
    /// Detail overlay
    pub overlay: Overlay,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Record the result of the catalog load (first call wins)
pub fn store_settle_catalog(store: &AppStore, result: Result<Vec<Item>, AppError>) {
    store.catalog().update(|catalog| {
        if !catalog.settle(result) {
            log::warn!("[CATALOG] Ignoring second load result");
        }
    });
}

/// Toggle a favorite and persist the set
pub fn store_toggle_favorite<S: FavoriteStorage>(store: &AppStore, manager: &FavoriteManager<S>, item_id: u32) {
    store.favorites().update(|favorites| {
        let now_favorite = manager.toggle(favorites, item_id);
        log::debug!("[FAVORITES] {} -> {}", item_id, now_favorite);
    });
}

/// Switch the active filter
pub fn store_set_filter(store: &AppStore, filter: Filter) {
    log::debug!("[FILTER] {:?}", filter);
    store.filter().set(filter);
}

/// Open the overlay on `item`, replacing any open item
pub fn store_select_item(store: &AppStore, item: Item) {
    store.overlay().update(|overlay| overlay.select(item));
}

/// Close the overlay if open
pub fn store_dismiss_overlay(store: &AppStore) {
    if store.overlay().with_untracked(Overlay::is_open) {
        store.overlay().update(Overlay::dismiss);
    }
}

/// Current grid content. Subscribes to `favorites` only under the
/// favorites filter, so toggles elsewhere leave the grid untouched.
pub fn store_view_content(store: &AppStore) -> ViewContent {
    let filter = store.filter().get();
    store.catalog().with(|catalog| {
        if filter.depends_on_favorites() {
            store.favorites().with(|favorites| view_content(catalog, favorites, &filter))
        } else {
            store.favorites().with_untracked(|favorites| view_content(catalog, favorites, &filter))
        }
    })
}
