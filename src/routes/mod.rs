//! HTTP route handlers.
//!
//! Two fixed routes: `/` for the greeting and `/health` for the platform
//! health probe. Anything else falls through to axum's default 404.

pub mod health;
pub mod home;

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::CACHE_CONTROL_NO_STORE;
use crate::middleware::request_id_layer;
use crate::state::AppState;

/// Creates the Axum router with both routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::index))
        // Health probes may use any method
        .route("/health", any(health::health))
        .with_state(state)
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_NO_STORE),
        ))
        // Request ID middleware - propagates x-request-id and scopes the request span
        .layer(middleware::from_fn(request_id_layer))
}
