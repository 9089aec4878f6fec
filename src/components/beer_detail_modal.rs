//! Beer Detail Modal
//!
//! Renders whatever detail the store holds; closed when it holds none.
//! Page scrolling is locked while open.

use beer_client::{placeholder_images, BeerDetail};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const NO_SCROLL_CLASS: &str = "no-scroll";

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(NO_SCROLL_CLASS)
    } else {
        classes.remove_1(NO_SCROLL_CLASS)
    };
    if result.is_err() {
        log::warn!("Could not toggle body scroll lock");
    }
}

/// "N/A" for missing (or zero) stats
fn stat(value: Option<f64>, suffix: &str) -> String {
    match value.filter(|v| *v != 0.0) {
        Some(v) => format!("{}{}", v, suffix),
        None => "N/A".to_string(),
    }
}

fn random_placeholder() -> String {
    let images = placeholder_images();
    let index = (js_sys::Math::random() * images.len() as f64) as usize;
    images[index.min(images.len() - 1)].to_string()
}

#[component]
pub fn BeerDetailModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    Effect::new(move |_| {
        set_body_scroll_locked(store.selected().read().is_some());
    });
    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        {move || store.selected().get().map(|beer| view! {
            <div class="modal-backdrop" on:click=move |_| ctx.close_detail(&store)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <button
                            class="modal-close"
                            aria-label="Close modal"
                            on:click=move |_| ctx.close_detail(&store)
                        >
                            "✕"
                        </button>
                    </div>
                    <DetailBody beer=beer />
                </div>
            </div>
        })}
    }
}

#[component]
fn DetailBody(beer: BeerDetail) -> impl IntoView {
    let store = use_app_store();
    let BeerDetail { beer, food_pairing, .. } = beer;
    let pairings = food_pairing.unwrap_or_default();

    view! {
        <div class="modal-content">
            <div class="modal-image">
                {match beer.image_url.clone() {
                    Some(src) => view! { <img src=src alt=beer.name.clone() /> }.into_any(),
                    None => view! { <div class="no-image">"No Image"</div> }.into_any(),
                }}
            </div>

            <div class="modal-details">
                <h2>{beer.name.clone()}</h2>
                <p class="tagline">{beer.tagline.clone()}</p>

                <div class="beer-stats">
                    <div class="stat">
                        <div class="stat-value">{stat(beer.ibu, "")}</div>
                        <div class="stat-label">"IBU"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">{stat(beer.abv, "%")}</div>
                        <div class="stat-label">"ABV"</div>
                    </div>
                    <div class="stat">
                        <div class="stat-value">{stat(beer.ebc, "")}</div>
                        <div class="stat-label">"EBC"</div>
                    </div>
                </div>

                {beer.description.clone().map(|description| view! {
                    <section>
                        <h3>"Description"</h3>
                        <p>{description}</p>
                    </section>
                })}

                {(!pairings.is_empty()).then(|| view! {
                    <section>
                        <h3>"Best served with:"</h3>
                        <ul>
                            {pairings.into_iter().map(|food| view! { <li>{food}</li> }).collect_view()}
                        </ul>
                    </section>
                })}

                <section class="similar-beers">
                    <h3>"You might also like:"</h3>
                    <div class="similar-grid">
                        <For
                            each=move || store.similar().get()
                            key=|similar| similar.id().to_string()
                            children=move |similar| {
                                let BeerDetail { beer: similar, .. } = similar;
                                let src = similar.image_url.clone().unwrap_or_else(random_placeholder);
                                let subtitle = similar.tagline.clone().or(similar.style.clone());
                                view! {
                                    <div class="similar-card">
                                        <img src=src alt=similar.name.clone() />
                                        <h4>{similar.name.clone()}</h4>
                                        <p>{subtitle}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </section>
            </div>
        </div>
    }
}
