//! # Routes
//!
//! Axum router configuration. The service has one canonical route plus a
//! catch-all, because the hosting platform may point any path at it.

use crate::handlers;
use crate::state::AppState;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;

/// Create the application router
///
/// Routes:
/// - POST    /create-preference - Create a Mercado Pago checkout preference
/// - OPTIONS /create-preference - CORS preflight
/// - anything else - same pipeline via fallback (405 for other methods)
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/create-preference",
            post(handlers::create_preference)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
