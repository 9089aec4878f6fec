//! Top-level Views
//!
//! Switched by `App` on the current [`View`](crate::context::View).

mod favourites;
mod home;

pub use favourites::FavouritesView;
pub use home::HomeView;
