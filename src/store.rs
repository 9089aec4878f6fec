//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use beer_client::BeerDetail;
use leptos::prelude::*;
use reactive_stores::Store;

/// State shared by both views and the detail modal
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Header search text
    pub query: String,
    /// Favorite ids as last read from storage
    pub favorite_ids: Vec<String>,
    /// Beer shown in the detail modal (None = closed)
    pub selected: Option<BeerDetail>,
    /// Suggestions for `selected`, filled in after it opens
    pub similar: Vec<BeerDetail>,
}

impl AppState {
    pub fn new(favorite_ids: Vec<String>) -> Self {
        Self {
            favorite_ids,
            ..Default::default()
        }
    }
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

pub fn store_set_favorites(store: &AppStore, ids: Vec<String>) {
    store.favorite_ids().set(ids);
}

pub fn store_is_favorite(store: &AppStore, id: &str) -> bool {
    store.favorite_ids().read().iter().any(|fav| fav == id)
}

/// Show `detail` in the modal; suggestions start empty
pub fn store_open_detail(store: &AppStore, detail: BeerDetail) {
    store.similar().write().clear();
    store.selected().set(Some(detail));
}

pub fn store_set_similar(store: &AppStore, similar: Vec<BeerDetail>) {
    store.similar().set(similar);
}

pub fn store_close_detail(store: &AppStore) {
    store.selected().set(None);
    store.similar().write().clear();
}
