use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;

pub fn build_routes(state: AppState) -> Router {
    let cv_files = ServeDir::new(state.cv_storage.root());
    let resource_files = ServeDir::new(state.resource_storage.root());
    let body_limit = state.settings.body_limit_bytes();
    Router::new()
        .route("/find-jobs-home", get(handlers::jobs::find_jobs_home))
        .route("/upload-cv", post(handlers::uploads::upload_cv))
        .route("/upload", post(handlers::uploads::upload_resource))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .nest_service("/resources", resource_files)
        .fallback_service(cv_files)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
