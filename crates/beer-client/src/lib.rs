//! Beer Bank Client Data Layer
//!
//! Layered like the rest of the app:
//! - domain: beers, pages and error types
//! - payload: parse step from upstream JSON into the domain
//! - client: [`ApiClient`] over an injected [`Transport`]
//! - favorites: [`Favorites`] over an injected [`KeyValueStore`]
//!
//! Nothing in here touches the browser directly, so the whole crate runs
//! under plain `cargo test`.

mod client;
mod cosmetics;
mod domain;
mod favorites;
mod generation;
mod paginator;
mod payload;
mod search;
mod similar;
mod transport;


pub use client::{ApiClient, LIST_PATH};
pub use cosmetics::{cosmetics_at, placeholder_images, Cosmetics};
pub use domain::{ApiError, Beer, BeerDetail, BeerPage, Brewer, StorageError};
pub use favorites::{Favorites, KeyValueStore, MemoryStore, FAVORITES_KEY};
pub use generation::{Generation, Ticket};
pub use paginator::{PageKind, PageRequest, Paginator, INITIAL_PAGE_SIZE, NEXT_PAGE_SIZE};
pub use search::{filter_beers, matches_query};
pub use similar::{select_similar, SIMILAR_LIMIT};
pub use transport::{present_params, QueryParams, Transport};
