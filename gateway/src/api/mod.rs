//! HTTP surface of the gateway.

pub mod health;
pub mod info;
pub mod stream;
pub mod tools;

use std::sync::Arc;

use axum::response::Redirect;
use axum::routing::get;
use axum::Router;

use crate::AppState;

/// Build the full application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/health") }))
        .merge(health::router(state.clone()))
        .merge(info::router())
        .merge(stream::router(state.clone()))
        .nest("/api/tools", tools::router(state))
}
