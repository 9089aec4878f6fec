//! Beer Card Component
//!
//! One grid cell. Clicking the card opens the detail modal; the star only
//! toggles the favorite.

use beer_client::Beer;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{store_is_favorite, use_app_store};

#[component]
pub fn BeerItem(
    beer: Beer,
    /// Called with the clicked beer
    on_open: Callback<Beer>,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let (image_failed, set_image_failed) = signal(false);

    let id = beer.id.clone();
    let is_favorite = {
        let id = id.clone();
        move || store_is_favorite(&store, &id)
    };
    let is_favorite_class = is_favorite.clone();

    let toggle = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        ctx.toggle_favorite(&store, &id);
    };

    let subtitle = beer
        .tagline
        .clone()
        .or_else(|| beer.style.clone())
        .unwrap_or_else(|| "No tagline available".to_string());
    let image_url = beer.image_url.clone();
    let name = beer.name.clone();
    // Zero reads as "unknown" on the card
    let abv = beer.abv.filter(|v| *v != 0.0);
    let ibu = beer.ibu.filter(|v| *v != 0.0);
    let style = beer.style.clone();

    let open = {
        let beer = beer.clone();
        move |_| on_open.run(beer.clone())
    };

    view! {
        <div class="beer-card" on:click=open>
            <button
                class=move || if is_favorite_class() { "favorite-btn active" } else { "favorite-btn" }
                aria-label="Toggle favorite"
                on:click=toggle
            >
                {move || if is_favorite() { "★" } else { "☆" }}
            </button>

            <div class="beer-card-image">
                {match image_url {
                    Some(src) => view! {
                        <Show
                            when=move || !image_failed.get()
                            fallback=|| view! { <div class="no-image">"No Image"</div> }
                        >
                            <img
                                src=src.clone()
                                alt=name.clone()
                                on:error=move |_| set_image_failed.set(true)
                            />
                        </Show>
                    }.into_any(),
                    None => view! { <div class="no-image">"No Image"</div> }.into_any(),
                }}
            </div>

            <div class="beer-card-info">
                <h3>{beer.name.clone()}</h3>
                <p class="tagline">{subtitle}</p>
                <div class="beer-badges">
                    {abv.map(|abv| view! { <span class="badge">{format!("ABV: {}%", abv)}</span> })}
                    {ibu.map(|ibu| view! { <span class="badge">{format!("IBU: {}", ibu)}</span> })}
                    {style.map(|style| view! { <span class="badge">{style}</span> })}
                </div>
            </div>
        </div>
    }
}
