//! Application Context
//!
//! Actions shared with every component via the Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, BrowserStorage};
use crate::config::AppConfig;
use crate::favorites::FavoriteManager;
use crate::models::Item;
use crate::store::{
    store_dismiss_overlay, store_select_item, store_set_filter, store_settle_catalog, store_toggle_favorite,
    AppState, AppStateStoreFields, AppStore,
};
use crate::view_model::Filter;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    store: AppStore,
    config: StoredValue<AppConfig>,
    favorites: StoredValue<FavoriteManager<BrowserStorage>>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let manager = FavoriteManager::new(BrowserStorage, config.storage_key.clone());
        Self {
            store: AppStore::new(AppState::default()),
            config: StoredValue::new(config),
            favorites: StoredValue::new(manager),
        }
    }

    pub fn store(&self) -> AppStore {
        self.store
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Restore favorites and start the single catalog load
    pub fn init(&self) {
        let restored = self.favorites.with_value(|manager| manager.load());
        self.store.favorites().set(restored);

        let store = self.store;
        let path = self.config.with_value(|config| config.data_path.clone());
        spawn_local(async move {
            let result = commands::fetch_catalog(&path).await;
            match &result {
                Ok(items) => log::info!("[CATALOG] Loaded {} drinks", items.len()),
                Err(e) => log::error!("[CATALOG] Error loading drinks: {}", e),
            }
            store_settle_catalog(&store, result);
        });
    }

    pub fn set_filter(&self, filter: Filter) {
        store_set_filter(&self.store, filter);
    }

    pub fn toggle_favorite(&self, item_id: u32) {
        self.favorites
            .with_value(|manager| store_toggle_favorite(&self.store, manager, item_id));
    }

    /// Reactive membership of one item, notifying only when it flips
    pub fn is_favorite(&self, item_id: u32) -> Memo<bool> {
        let store = self.store;
        Memo::new(move |_| store.favorites().with(|favorites| favorites.contains(item_id)))
    }

    pub fn open_item(&self, item: Item) {
        store_select_item(&self.store, item);
    }

    pub fn close_overlay(&self) {
        store_dismiss_overlay(&self.store);
    }

    pub fn reload_page(&self) {
        commands::reload_page();
    }
}
