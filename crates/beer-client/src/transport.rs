//! HTTP Transport Seam
//!
//! The client never talks to the network itself. Browsers inject a fetch
//! based transport, tests inject canned responses.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::ApiError;

/// Query parameters; entries without a value are not sent
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// GET-only JSON transport
///
/// Implementations resolve `path` against their own origin and must map a
/// non-success status to [`ApiError::Status`].
#[async_trait(?Send)]
pub trait Transport {
    async fn get_json(&self, path: &str, params: &QueryParams<'_>) -> Result<Value, ApiError>;
}

/// Pairs that actually go on the wire
pub fn present_params<'p>(params: &'p QueryParams<'_>) -> Vec<(&'p str, &'p str)> {
    params
        .iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (*key, v)))
        .collect()
}
