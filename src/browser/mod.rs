//! Browser Adapters
//!
//! Implementations of the client crate's seams on top of web APIs:
//! fetch for the catalog transport, `localStorage` for favorites and the
//! console for log output.

mod fetch;
mod logger;
mod storage;

use wasm_bindgen::{JsCast, JsValue};

pub use fetch::FetchTransport;
pub use logger::ConsoleLogger;
pub use storage::BrowserStorage;

/// Best-effort text for a thrown JS value
fn js_message(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    match value.dyn_ref::<js_sys::Error>() {
        Some(error) => String::from(error.message()),
        None => format!("{:?}", value),
    }
}
