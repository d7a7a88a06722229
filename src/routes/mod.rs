pub mod health;
pub mod teams;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::db::TeamStore;

/// Full application router over an already connected store.
pub fn router(store: TeamStore) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(|| async { "Team API - v1.0" }))
        .route("/health", get(health::health_check))
        .route(
            "/team/{id}",
            get(teams::get_team)
                .put(teams::create_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}
