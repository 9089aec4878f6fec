//! Domain Layer
//!
//! Catalog entities and error types. No I/O lives here.

mod beer;
mod error;

pub use beer::{Beer, BeerDetail, BeerPage, Brewer};
pub use error::{ApiError, StorageError};
