use std::sync::Arc;

use axum::{Router, middleware};
use tower::Layer;
use tower_http::{
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::TraceLayer,
};

use crate::{
    middleware::{catch_panic_layer, cors_layer, json_error_middleware},
    state::AppState,
};

use super::{catalog, favorites, public};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(public::router())
        .merge(catalog::router(state.clone()))
        .merge(favorites::router(state))
}

/// The full application: routes plus the JSON error, panic, CORS and trace layers.
pub fn app(state: Arc<AppState>) -> Router {
    router(state)
        .layer(middleware::from_fn(json_error_middleware))
        .layer(catch_panic_layer())
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// What the server binds: `app` behind trailing-slash trimming, so `/people/`
/// routes like `/people`. The trim has to run before the router matches.
pub fn service(state: Arc<AppState>) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app(state))
}
