//! Upstream Catalog
//!
//! The `Catalog` trait is the seam between routes and the real Catalog.beer
//! API; tests plug in a fake.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::header::ACCEPT;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, ServerError};

const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// `.` and `..` (escaped or not) are resolved away by URL parsing, so they
/// can never address a single beer
pub(crate) fn is_dot_segment(id: &str) -> bool {
    id == "." || id == ".."
}

/// Successful upstream answer, relayed as-is
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogResponse {
    pub status: u16,
    pub body: Value,
}

#[async_trait]
pub trait Catalog: Send + Sync {
    /// `GET /beer` with the caller's raw query string appended verbatim
    async fn list(&self, raw_query: Option<&str>) -> Result<CatalogResponse, AppError>;

    /// `GET /beer/{id}`
    async fn detail(&self, id: &str) -> Result<CatalogResponse, AppError>;
}

/// Catalog.beer over HTTPS with Basic auth (`key:` with an empty password)
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl CatalogClient {
    pub fn new(config: &Config) -> Result<Self, ServerError> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: config.catalog_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    fn list_url(&self, raw_query: Option<&str>) -> String {
        match raw_query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}/beer?{}", self.base_url, query),
            None => format!("{}/beer", self.base_url),
        }
    }

    fn detail_url(&self, id: &str) -> String {
        format!("{}/beer/{}", self.base_url, utf8_percent_encode(id, SEGMENT))
    }

    async fn fetch(&self, url: &str) -> Result<CatalogResponse, AppError> {
        debug!("Upstream GET {url}");

        let response = self
            .http
            .get(url)
            .basic_auth(&self.api_key, None::<&str>)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let bytes = response.bytes().await?;
        let body = serde_json::from_slice(&bytes)?;
        Ok(CatalogResponse {
            status: status.as_u16(),
            body,
        })
    }
}

#[async_trait]
impl Catalog for CatalogClient {
    async fn list(&self, raw_query: Option<&str>) -> Result<CatalogResponse, AppError> {
        self.fetch(&self.list_url(raw_query)).await
    }

    async fn detail(&self, id: &str) -> Result<CatalogResponse, AppError> {
        if is_dot_segment(id) {
            return Err(AppError::InvalidId(id.to_string()));
        }
        self.fetch(&self.detail_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex};

    use axum::{
        extract::{Path as UriPath, State},
        http::{HeaderMap, StatusCode},
        routing::get,
        Json, Router,
    };
    use serde_json::json;
    use tokio::net::TcpListener;

    fn client() -> CatalogClient {
        let config = Config {
            port: 0,
            catalog_url: "https://catalog.test".to_string(),
            api_key: "secret".to_string(),
            static_dir: PathBuf::from("dist"),
        };
        CatalogClient::new(&config).unwrap()
    }

    #[test]
    fn test_list_url_forwards_query_verbatim() {
        let client = client();
        assert_eq!(client.list_url(None), "https://catalog.test/beer");
        assert_eq!(client.list_url(Some("")), "https://catalog.test/beer");
        assert_eq!(
            client.list_url(Some("count=20&cursor=abc%3D")),
            "https://catalog.test/beer?count=20&cursor=abc%3D"
        );
    }

    #[test]
    fn test_detail_url_encodes_id() {
        let client = client();
        assert_eq!(client.detail_url("5"), "https://catalog.test/beer/5");
        assert_eq!(client.detail_url("a b/c"), "https://catalog.test/beer/a%20b%2Fc");
        assert_eq!(client.detail_url("v1.2"), "https://catalog.test/beer/v1.2");
    }

    #[test]
    fn test_is_dot_segment() {
        assert!(is_dot_segment("."));
        assert!(is_dot_segment(".."));
        assert!(!is_dot_segment("..."));
        assert!(!is_dot_segment(".5"));
    }

    type Seen = Arc<Mutex<Vec<(String, HeaderMap)>>>;

    /// Local stand-in for Catalog.beer: beer 5 exists, everything else is 404
    async fn spawn_catalog() -> (String, Seen) {
        let seen: Seen = Arc::default();

        async fn beer(
            State(seen): State<Seen>,
            UriPath(id): UriPath<String>,
            headers: HeaderMap,
        ) -> Result<Json<Value>, StatusCode> {
            seen.lock().unwrap().push((id.clone(), headers));
            if id == "5" {
                Ok(Json(json!({ "id": "5", "name": "Pale Ale" })))
            } else {
                Err(StatusCode::NOT_FOUND)
            }
        }

        let app = Router::new()
            .route("/beer/{id}", get(beer))
            .with_state(seen.clone());
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{addr}"), seen)
    }

    fn client_for(catalog_url: String) -> CatalogClient {
        let config = Config {
            port: 0,
            catalog_url,
            api_key: "secret".to_string(),
            static_dir: PathBuf::from("dist"),
        };
        CatalogClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_sends_basic_auth_and_accept() {
        let (url, seen) = spawn_catalog().await;
        let client = client_for(url);

        let response = client.detail("5").await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["name"], "Pale Ale");

        let seen = seen.lock().unwrap();
        let (id, headers) = &seen[0];
        assert_eq!(id, "5");
        // base64("secret:")
        assert_eq!(headers["authorization"], "Basic c2VjcmV0Og==");
        assert_eq!(headers["accept"], "application/json");
    }

    #[tokio::test]
    async fn test_fetch_maps_upstream_404() {
        let (url, _seen) = spawn_catalog().await;
        let client = client_for(url);

        let err = client.detail("9").await.unwrap_err();
        assert!(matches!(err, AppError::Upstream { status: 404, .. }));
        assert_eq!(err.to_string(), "API Error: 404 Not Found");
    }

    #[tokio::test]
    async fn test_dot_ids_never_reach_upstream() {
        let (url, seen) = spawn_catalog().await;
        let client = client_for(url);

        for id in [".", ".."] {
            let err = client.detail(id).await.unwrap_err();
            assert!(matches!(err, AppError::InvalidId(_)));
        }
        assert!(seen.lock().unwrap().is_empty());
    }
}
