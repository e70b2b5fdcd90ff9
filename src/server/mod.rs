//! # HTTP Server for Label Sheets
//!
//! Serves PDF label sheets to the label designer frontend.
//!
//! ## Usage
//!
//! ```bash
//! labelsheet serve --listen 0.0.0.0:3001
//! ```
//!
//! ## Routes
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | GET | `/api/health` | liveness |
//! | POST | `/api/labels/sheet` | any batch → PDF |
//! | POST | `/api/labels/layout` | any batch → JSON slots |
//! | POST | `/api/labels/exhibition` | exhibition cards → PDF |
//! | POST | `/api/labels/stock` | oval discount labels → PDF |
//! | POST | `/api/labels/price-batch` | price label cart → PDF |
//!
//! The frontend's original paths (`/api/etiquetas/exhibicion`,
//! `/api/etiquetas/stock`, `/api/etiquetas/precio-regular-batch`) route to
//! the same handlers.

mod handlers;
mod state;

pub use handlers::ApiError;
pub use state::{AppState, ServerConfig};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::error::LabelError;

/// Request body limit; logos arrive base64-encoded inside JSON.
const BODY_LIMIT: usize = 50 * 1024 * 1024;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/labels/sheet", post(handlers::labels::sheet))
        .route("/api/labels/layout", post(handlers::labels::layout))
        .route("/api/labels/exhibition", post(handlers::labels::exhibition))
        .route("/api/labels/stock", post(handlers::labels::stock))
        .route("/api/labels/price-batch", post(handlers::labels::price_batch))
        // Paths used by the original frontend
        .route("/api/etiquetas/exhibicion", post(handlers::labels::exhibition))
        .route("/api/etiquetas/stock", post(handlers::labels::stock))
        .route(
            "/api/etiquetas/precio-regular-batch",
            post(handlers::labels::price_batch),
        )
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server.
///
/// ## Example
///
/// ```no_run
/// use labelsheet::server::{serve, ServerConfig};
///
/// # async fn example() -> Result<(), labelsheet::error::LabelError> {
/// let config = ServerConfig {
///     listen_addr: "0.0.0.0:3001".to_string(),
///     ..Default::default()
/// };
///
/// serve(config).await?;
/// # Ok(())
/// # }
/// ```
pub async fn serve(config: ServerConfig) -> Result<(), LabelError> {
    config.page.validate()?;
    let app = router(Arc::new(AppState::new(config.clone())));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(
        listen = %config.listen_addr,
        page_width = config.page.width,
        page_height = config.page.height,
        margin = config.page.margin,
        "label server listening"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
