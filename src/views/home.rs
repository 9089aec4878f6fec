//! Home View
//!
//! The catalog grid. The first page (or a search) is loaded whenever the
//! header query changes; further pages load as the user scrolls near the
//! bottom, except while searching.

use beer_client::{Beer, PageRequest, Paginator};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::BeerItem;
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Distance from the bottom, in pixels, that triggers the next page
const SCROLL_THRESHOLD: f64 = 300.0;

fn near_bottom() -> bool {
    let window = window();
    let Some(root) = window.document().and_then(|d| d.document_element()) else {
        return false;
    };
    let scrolled = window.scroll_y().unwrap_or_default();
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    scrolled + viewport >= f64::from(root.scroll_height()) - SCROLL_THRESHOLD
}

fn load_more(ctx: AppContext, pager: RwSignal<Paginator>) {
    if !near_bottom() {
        return;
    }
    if let Some(request) = pager.try_update(|p| p.next()).flatten() {
        load_page(ctx, pager, request);
    }
}

fn load_page(ctx: AppContext, pager: RwSignal<Paginator>, request: PageRequest) {
    let client = ctx.client();
    spawn_local(async move {
        let page = client.load(&request).await;
        let applied = pager
            .try_update(|p| p.apply(&request, page))
            .unwrap_or(false);

        if applied {
            // A short page may leave nothing to scroll; check again once rendered
            TimeoutFuture::new(0).await;
            load_more(ctx, pager);
        }
    });
}

#[component]
pub fn HomeView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let pager = RwSignal::new(Paginator::new());

    // Restart paging on every query change (including the initial empty one)
    Effect::new(move |_| {
        let query = store.query().get();
        if let Some(request) = pager.try_update(|p| p.start(&query)) {
            load_page(ctx, pager, request);
        }
    });

    let scroll_handle = window_event_listener(ev::scroll, move |_| load_more(ctx, pager));
    on_cleanup(move || scroll_handle.remove());

    let on_open = Callback::new(move |beer: Beer| ctx.open_detail(store, beer, None));

    let beers = move || pager.with(|p| p.beers().to_vec());
    let is_empty = move || pager.with(|p| p.beers().is_empty());
    let is_loading = move || pager.with(|p| p.is_loading());
    let grid_class = move || match pager.with(|p| p.beers().len()) {
        1 => "beer-grid single",
        2 => "beer-grid pair",
        _ => "beer-grid",
    };

    view! {
        <main class="container">
            <Show when=move || is_loading() && is_empty()>
                <div class="spinner"></div>
            </Show>

            <Show when=move || !is_loading() && is_empty()>
                <p class="empty-state">
                    {move || if pager.with(|p| p.is_searching()) {
                        "No beers found matching your search."
                    } else {
                        "No beers available."
                    }}
                </p>
            </Show>

            <div class=grid_class>
                <For
                    each=beers
                    key=|beer| beer.id.clone()
                    children=move |beer| view! { <BeerItem beer=beer on_open=on_open /> }
                />
            </div>

            <Show when=move || is_loading() && !is_empty()>
                <div class="spinner small"></div>
            </Show>

            <Show when=move || pager.with(|p| !p.has_more() && !p.beers().is_empty() && !p.is_searching())>
                <p class="end-of-results">"You've reached the end of our beer collection!"</p>
            </Show>
        </main>
    }
}
