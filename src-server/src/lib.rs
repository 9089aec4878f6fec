//! Beer Bank Proxy
//!
//! Forwards the frontend's `/api/beers` calls to Catalog.beer so the browser
//! never sees the API key and never hits a cross-origin request.
//!
//! Layout:
//! - config: environment and secret loading
//! - upstream: the `Catalog` seam and its reqwest implementation
//! - routes: axum handlers
//! - error: handler and startup errors

use std::path::Path;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::get,
    Router,
};
use tokio::{net::TcpListener, signal::ctrl_c};
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tower_http::{services::ServeDir, set_header::SetResponseHeaderLayer};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod upstream;

#[cfg(test)]
mod tests;

use config::Config;
use error::ServerError;
use routes::{get_beer, list_beers, missing_id, preflight};
use state::AppState;

const ALLOW_ORIGIN: &str = "*";
const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// API routes plus, when `static_dir` is given, the built frontend as fallback.
/// Every response carries the CORS headers.
pub fn router(state: Arc<AppState>, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .route("/api/beers", get(list_beers).options(preflight))
        .route("/api/beers/", get(missing_id).options(preflight))
        .route("/api/beers/{id}", get(get_beer).options(preflight));

    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app.layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static(ALLOW_ORIGIN),
    ))
    .layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    ))
    .layer(SetResponseHeaderLayer::overriding(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    ))
    .with_state(state)
}

pub async fn start_server() -> Result<(), ServerError> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    info!("Loading configuration...");
    let config = Config::load().inspect_err(|e| error!("{e}"))?;
    let state = AppState::new(&config)?;

    let static_dir = config.static_dir.is_dir().then_some(config.static_dir.as_path());
    match static_dir {
        Some(dir) => info!("Serving frontend from {}", dir.display()),
        None => info!("No frontend at {}, serving API only", config.static_dir.display()),
    }
    let app = router(state, static_dir);

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
    info!("Proxy running on {address}, upstream {}", config.catalog_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
