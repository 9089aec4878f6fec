//! Header Component
//!
//! Navigation, title and the search box shared by both views.

use leptos::ev;
use leptos::prelude::*;

use crate::context::{AppContext, View};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (scrolled, set_scrolled) = signal(false);

    let scroll_handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or_default();
        set_scrolled.set(y > 0.0);
    });
    on_cleanup(move || scroll_handle.remove());

    // Switching views always starts from an empty search
    let go_to = move |view: View| {
        store.query().set(String::new());
        ctx.navigate(view);
    };

    view! {
        <header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <nav class="site-nav">
                <button
                    class=move || if ctx.view.get() == View::Home { "nav-link active" } else { "nav-link" }
                    on:click=move |_| go_to(View::Home)
                >
                    "HOME"
                </button>
                <button
                    class=move || if ctx.view.get() == View::Favourites { "nav-link active" } else { "nav-link" }
                    on:click=move |_| go_to(View::Favourites)
                >
                    "FAVOURITE"
                </button>
            </nav>

            <div class="site-title">
                <h1>"The Beer Bank"</h1>
                <p>"Find your favourite beer here"</p>
            </div>

            <div class="search-bar">
                <input
                    type="text"
                    placeholder="Search for beer name"
                    prop:value=move || store.query().get()
                    on:input=move |ev| store.query().set(event_target_value(&ev))
                />
            </div>
        </header>
    }
}
