//! HTTP plumbing around the Leptos routes
//!
//! Routes:
//! - `GET /health` - liveness probe, always `200 ok`
//! - `GET /pkg/*` - compiled JS/WASM/CSS bundle with pre-compressed variants
//!
//! Everything else is handled by the Leptos router merged in `main`.

use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use axum::http::{HeaderValue, header};
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::compression::{CompressionLayer, CompressionLevel};
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::core::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Leptos configuration error: {0}")]
    Leptos(String),

    #[error("Invalid header value: {0}")]
    Header(#[from] header::InvalidHeaderValue),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Health check and static bundle routes
pub fn site_router(config: &Config, pkg_dir: impl AsRef<Path>) -> Result<Router, ServerError> {
    let cache_control = HeaderValue::from_str(&config.cache_control())?;

    // Serves .br (brotli) and .gz (gzip) files automatically when present
    let pkg_service = ServiceBuilder::new()
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            cache_control,
        ))
        .service(
            ServeDir::new(pkg_dir.as_ref())
                .precompressed_br()
                .precompressed_gzip(),
        );

    Ok(Router::new()
        .route("/health", get(health))
        .nest_service("/pkg", pkg_service))
}

/// Wrap `router` in brotli/gzip response compression when enabled
pub fn with_compression(router: Router, config: &Config) -> Router {
    if !config.compression {
        return router;
    }
    router.layer(
        CompressionLayer::new()
            .br(true)
            .gzip(true)
            .quality(CompressionLevel::Best),
    )
}

async fn health() -> &'static str {
    "ok"
}
