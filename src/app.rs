//! Beer Bank App
//!
//! Root component: builds the services, provides them via context and
//! switches between the two views.

use beer_client::{ApiClient, Favorites};
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser::{BrowserStorage, FetchTransport};
use crate::components::{BeerDetailModal, Header};
use crate::context::{AppContext, View};
use crate::store::AppState;
use crate::views::{FavouritesView, HomeView};

#[component]
pub fn App() -> impl IntoView {
    let client = ApiClient::new(FetchTransport::new());
    let favorites = Favorites::from_option(BrowserStorage::open());
    let (current_view, set_current_view) = signal(View::Home);

    let ctx = AppContext::new(client, favorites, (current_view, set_current_view));
    provide_context(ctx);
    provide_context(Store::new(AppState::new(ctx.favorite_ids())));

    view! {
        <div class="app">
            <Header />
            {move || match current_view.get() {
                View::Home => view! { <HomeView /> }.into_any(),
                View::Favourites => view! { <FavouritesView /> }.into_any(),
            }}
            <BeerDetailModal />
        </div>
    }
}
