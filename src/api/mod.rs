mod handlers;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::archive::Archive;

pub fn create_router(archive: Arc<Archive>) -> Router {
    let api = Router::new()
        // People
        .route("/people", get(handlers::list_people))
        .route("/people/{id}", get(handlers::get_person))
        // View-models
        .route("/views/table", get(handlers::table_view))
        .route("/views/tree", get(handlers::tree_view))
        .route("/views/timeline", get(handlers::timeline_view))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(archive)
}
