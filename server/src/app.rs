use axum::{http::Method, middleware as axum_middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::{handlers, middleware, state::AppState};

/// `/healthz`, `/config.json`, then the SPA with `index.html` as the fallback
/// for client-side routes. Page requests pass through the route guard first.
pub fn build_router(state: AppState) -> Router {
    let spa = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    Router::new()
        .route("/healthz", get(handlers::health::healthz))
        .route("/config.json", get(handlers::config::get_runtime_config))
        .fallback_service(spa)
        .layer(axum_middleware::from_fn(middleware::route_guard))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
