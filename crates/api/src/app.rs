use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    handlers::{
        error::{internal_error, not_found},
        health::health,
        items::{get_item, list_items, put_item},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let item_routes = Router::new()
        .route("/list", get(list_items))
        .route("/put", post(put_item))
        .route("/get/{key}", get(get_item));

    Router::new()
        .route("/health", get(health))
        .nest("/picus", item_routes)
        .fallback(not_found)
        .layer(CatchPanicLayer::custom(internal_error))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
