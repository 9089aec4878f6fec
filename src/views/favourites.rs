//! Favourites View
//!
//! Loads one large page and shows the favorites among it. The header search
//! filters that list locally; nothing is re-fetched.

use beer_client::{filter_beers, Beer};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::BeerItem;
use crate::context::{AppContext, View};
use crate::store::{use_app_store, AppStateStoreFields};

/// Beers fetched to find the favorites in
const FAVOURITES_PAGE_SIZE: usize = 100;

#[component]
pub fn FavouritesView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (all_beers, set_all_beers) = signal(Vec::<Beer>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let client = ctx.client();
        spawn_local(async move {
            let page = client.fetch_list(FAVOURITES_PAGE_SIZE, None).await;
            log::debug!("Loaded {} beers for favourites", page.beers.len());
            set_all_beers.set(page.beers);
            set_loading.set(false);
        });
    });

    // Favorites in catalog order, narrowed by the search box. Storage is the
    // source of truth; the store field only signals that it changed.
    let shown = Memo::new(move |_| {
        store.favorite_ids().track();
        let favorites = all_beers.with(|beers| ctx.favorite_beers(beers));
        filter_beers(&favorites, &store.query().get())
    });

    let on_open = Callback::new(move |beer: Beer| {
        ctx.open_detail(store, beer, Some(all_beers.get_untracked()));
    });

    let go_home = move |_: web_sys::MouseEvent| {
        store.query().set(String::new());
        ctx.navigate(View::Home);
    };

    let count_text = move || {
        let count = shown.with(|beers| beers.len());
        format!("You have {} favorite{}", count, if count == 1 { "" } else { "s" })
    };

    view! {
        <main class="container">
            <div class="page-title">
                <h1>"My Favorite Beers"</h1>
                <p>{count_text}</p>
                <button class="back-link" on:click=go_home>
                    "← Back to all beers"
                </button>
            </div>

            <Show when=move || loading.get()>
                <div class="spinner"></div>
            </Show>

            <Show when=move || !loading.get() && shown.with(|beers| beers.is_empty())>
                <div class="empty-state">
                    <h2>"No favorite beers yet"</h2>
                    <p>"Start exploring and add some beers to your favorites!"</p>
                    <button class="explore-btn" on:click=go_home>
                        "Explore Beers →"
                    </button>
                </div>
            </Show>

            <div class="beer-grid">
                <For
                    each=move || shown.get()
                    key=|beer| beer.id.clone()
                    children=move |beer| view! { <BeerItem beer=beer on_open=on_open /> }
                />
            </div>
        </main>
    }
}
