pub mod cli;
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
pub mod page;
pub mod routes;
pub mod template;

pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Create the app router with every layer the server runs with
///
/// Integration tests drive this router directly, without binding a socket.
pub fn create_app(config: config::Config) -> axum::Router {
    routes::router(AppState::new(config))
        // No-cache for pages, long-lived cache for embedded assets
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        // Minify HTML responses before compression
        .layer(axum::middleware::map_response(
            middleware::minify_html_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
