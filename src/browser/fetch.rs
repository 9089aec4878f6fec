//! Fetch Transport
//!
//! `Transport` over `window.fetch`, resolving paths against the page origin.

use async_trait::async_trait;
use beer_client::{present_params, ApiError, QueryParams, Transport};
use serde_json::Value;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response, Url};

use super::js_message;

#[derive(Debug, Clone)]
pub struct FetchTransport {
    origin: String,
}

impl FetchTransport {
    /// Same-origin transport for the current page
    pub fn new() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        Self::with_origin(origin)
    }

    pub fn with_origin(origin: impl Into<String>) -> Self {
        Self { origin: origin.into() }
    }

    fn url(&self, path: &str, params: &QueryParams<'_>) -> Result<String, ApiError> {
        let url = Url::new_with_base(path, &self.origin)
            .map_err(|e| ApiError::InvalidInput(format!("Bad URL {}: {}", path, js_message(&e))))?;
        let search = url.search_params();
        for (key, value) in present_params(params) {
            search.append(key, value);
        }
        Ok(url.href())
    }
}

#[async_trait(?Send)]
impl Transport for FetchTransport {
    async fn get_json(&self, path: &str, params: &QueryParams<'_>) -> Result<Value, ApiError> {
        let network = |e: wasm_bindgen::JsValue| ApiError::Network(js_message(&e));

        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
        let url = self.url(path, params)?;

        let init = RequestInit::new();
        init.set_method("GET");
        let request = Request::new_with_str_and_init(&url, &init).map_err(network)?;
        request.headers().set("Accept", "application/json").map_err(network)?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status(),
                status_text: response.status_text(),
            });
        }

        let text = JsFuture::from(response.text().map_err(network)?)
            .await
            .map_err(network)?
            .as_string()
            .unwrap_or_default();
        Ok(serde_json::from_str(&text)?)
    }
}
