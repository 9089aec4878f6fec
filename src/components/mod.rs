//! UI Components
//!
//! Reusable Leptos components.

mod beer_detail_modal;
mod beer_item;
mod header;

pub use beer_detail_modal::BeerDetailModal;
pub use beer_item::BeerItem;
pub use header::Header;
