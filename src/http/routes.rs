use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(crate::http::handlers::predict::home))
        .route("/predict", post(crate::http::handlers::predict::predict))
        .route("/ops/readiness", get(crate::http::handlers::ops::readiness))
        .route("/ops/liveness", get(crate::http::handlers::ops::liveness))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
