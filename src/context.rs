//! Application Context
//!
//! Shared services provided via Leptos Context API: the catalog client, the
//! favorites store and the current view.

use beer_client::{ApiClient, Beer, Favorites, Generation, SIMILAR_LIMIT};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::{BrowserStorage, FetchTransport};
use crate::store::{
    store_close_detail, store_open_detail, store_set_favorites, store_set_similar, AppStore,
};

/// Beers fetched as the suggestion pool when the caller has none
pub const SIMILAR_POOL_SIZE: usize = 50;

/// Top-level views; there is no router
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Home,
    Favourites,
}

pub type Client = ApiClient<FetchTransport>;

/// App-wide services provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    client: StoredValue<Client>,
    favorites: StoredValue<Favorites<BrowserStorage>, LocalStorage>,
    /// Tickets for detail lookups; a newer click wins
    detail_generation: StoredValue<Generation>,
    /// Current view - read
    pub view: ReadSignal<View>,
    /// Current view - write
    set_view: WriteSignal<View>,
}

impl AppContext {
    pub fn new(
        client: Client,
        favorites: Favorites<BrowserStorage>,
        view: (ReadSignal<View>, WriteSignal<View>),
    ) -> Self {
        Self {
            client: StoredValue::new(client),
            favorites: StoredValue::new_local(favorites),
            detail_generation: StoredValue::new(Generation::new()),
            view: view.0,
            set_view: view.1,
        }
    }

    pub fn client(&self) -> Client {
        self.client.get_value()
    }

    pub fn navigate(&self, view: View) {
        self.set_view.set(view);
    }

    pub fn favorite_ids(&self) -> Vec<String> {
        self.favorites.with_value(|favorites| favorites.list())
    }

    pub fn favorite_beers(&self, beers: &[Beer]) -> Vec<Beer> {
        self.favorites.with_value(|favorites| favorites.favorite_beers(beers))
    }

    /// Flip `id` in storage and publish the new set; returns the new state
    pub fn toggle_favorite(&self, store: &AppStore, id: &str) -> bool {
        let (now_favorite, ids) = self
            .favorites
            .with_value(|favorites| (favorites.toggle(id), favorites.list()));
        store_set_favorites(store, ids);
        now_favorite
    }

    /// Load `beer` into the detail modal, then its suggestions.
    ///
    /// Suggestions are drawn from `pool`, or from a fresh first page when
    /// `pool` is None. Results of a superseded click are dropped.
    pub fn open_detail(&self, store: AppStore, beer: Beer, pool: Option<Vec<Beer>>) {
        let client = self.client();
        let generation = self.detail_generation.get_value();
        let ticket = generation.issue();
        store_close_detail(&store);

        spawn_local(async move {
            let detail = match client.fetch_detail(&beer.id).await {
                Ok(detail) => detail,
                Err(e) => {
                    log::error!("Error loading beer details: {}", e);
                    return;
                }
            };
            if !generation.is_current(ticket) {
                return;
            }
            let target = detail.beer.clone();
            store_open_detail(&store, detail);

            let pool = match pool {
                Some(pool) => pool,
                None => client.fetch_list(SIMILAR_POOL_SIZE, None).await.beers,
            };
            let similar = client.similar_beers(&target, &pool, SIMILAR_LIMIT).await;
            if generation.is_current(ticket) {
                store_set_similar(&store, similar);
            }
        });
    }

    pub fn close_detail(&self, store: &AppStore) {
        self.detail_generation.with_value(|generation| generation.invalidate());
        store_close_detail(store);
    }
}
