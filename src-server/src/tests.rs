//! Route Tests
//!
//! Drives the full router (layers included) against a fake catalog.

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::error::AppError;
    use crate::router;
    use crate::state::AppState;
    use crate::upstream::{Catalog, CatalogResponse};

    /// What the fake answers with
    #[derive(Clone)]
    enum Outcome {
        Ok(Value),
        Status(u16, &'static str),
        NotJson,
    }

    impl Outcome {
        fn resolve(&self) -> Result<CatalogResponse, AppError> {
            match self {
                Outcome::Ok(body) => Ok(CatalogResponse {
                    status: 200,
                    body: body.clone(),
                }),
                Outcome::Status(status, reason) => Err(AppError::Upstream {
                    status: *status,
                    reason: reason.to_string(),
                }),
                Outcome::NotJson => Err(serde_json::from_str::<Value>("<html>").unwrap_err().into()),
            }
        }
    }

    struct FakeCatalog {
        outcome: Outcome,
        requests: Mutex<Vec<String>>,
    }

    impl FakeCatalog {
        fn new(outcome: Outcome) -> Arc<Self> {
            Arc::new(Self {
                outcome,
                requests: Mutex::new(Vec::new()),
            })
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Catalog for FakeCatalog {
        async fn list(&self, raw_query: Option<&str>) -> Result<CatalogResponse, AppError> {
            self.requests
                .lock()
                .unwrap()
                .push(format!("list?{}", raw_query.unwrap_or_default()));
            self.outcome.resolve()
        }

        async fn detail(&self, id: &str) -> Result<CatalogResponse, AppError> {
            self.requests.lock().unwrap().push(format!("detail:{id}"));
            self.outcome.resolve()
        }
    }

    async fn send(catalog: Arc<FakeCatalog>, method: Method, uri: &str) -> Response {
        let app = router(AppState::with_catalog(catalog), None);
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        app.oneshot(request).await.unwrap()
    }

    async fn body_of(response: Response) -> Vec<u8> {
        to_bytes(response.into_body(), usize::MAX).await.unwrap().to_vec()
    }

    async fn json_of(response: Response) -> Value {
        serde_json::from_slice(&body_of(response).await).unwrap()
    }

    fn assert_cors(response: &Response) {
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_METHODS],
            "GET, POST, PUT, DELETE, OPTIONS"
        );
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type, Authorization"
        );
    }

    #[tokio::test]
    async fn test_list_relays_body_and_query() {
        let payload = json!({ "data": [{ "id": "1", "name": "Pale Ale" }], "has_more": false });
        let catalog = FakeCatalog::new(Outcome::Ok(payload.clone()));

        let response = send(catalog.clone(), Method::GET, "/api/beers?count=20&cursor=c1").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_cors(&response);
        assert_eq!(json_of(response).await, payload);
        assert_eq!(catalog.requests(), vec!["list?count=20&cursor=c1"]);
    }

    #[tokio::test]
    async fn test_detail_passes_decoded_id() {
        let catalog = FakeCatalog::new(Outcome::Ok(json!({ "id": "a b", "name": "Spaced" })));

        let response = send(catalog.clone(), Method::GET, "/api/beers/a%20b").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(catalog.requests(), vec!["detail:a b"]);
    }

    #[tokio::test]
    async fn test_blank_id_is_bad_request() {
        for uri in ["/api/beers/", "/api/beers/%20"] {
            let catalog = FakeCatalog::new(Outcome::Ok(json!({})));
            let response = send(catalog.clone(), Method::GET, uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_cors(&response);
            assert_eq!(
                json_of(response).await,
                json!({ "error": true, "error_msg": "Beer ID is required" })
            );
            assert!(catalog.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn test_dot_segment_id_is_bad_request() {
        for (uri, id) in [("/api/beers/%2E%2E", ".."), ("/api/beers/%2e", ".")] {
            let catalog = FakeCatalog::new(Outcome::Ok(json!({})));
            let response = send(catalog.clone(), Method::GET, uri).await;

            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_cors(&response);
            assert_eq!(
                json_of(response).await,
                json!({ "error": true, "error_msg": format!("Invalid beer ID: {id}") })
            );
            assert!(catalog.requests().is_empty());
        }
    }

    #[tokio::test]
    async fn test_upstream_status_becomes_500_envelope() {
        let catalog = FakeCatalog::new(Outcome::Status(404, "Not Found"));

        let response = send(catalog, Method::GET, "/api/beers/9").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_cors(&response);
        assert_eq!(
            json_of(response).await,
            json!({ "error": true, "error_msg": "API Error: 404 Not Found" })
        );
    }

    #[tokio::test]
    async fn test_non_json_upstream_is_500() {
        let catalog = FakeCatalog::new(Outcome::NotJson);

        let response = send(catalog, Method::GET, "/api/beers").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_of(response).await;
        assert_eq!(body["error"], json!(true));
        assert!(body["error_msg"].as_str().unwrap().contains("invalid JSON"));
    }

    #[tokio::test]
    async fn test_preflight_is_empty_200() {
        for uri in ["/api/beers", "/api/beers/7"] {
            let catalog = FakeCatalog::new(Outcome::Ok(json!({})));
            let response = send(catalog.clone(), Method::OPTIONS, uri).await;

            assert_eq!(response.status(), StatusCode::OK);
            assert_cors(&response);
            assert!(body_of(response).await.is_empty());
            assert!(catalog.requests().is_empty());
        }
    }
}
