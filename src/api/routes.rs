use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id::{make_span_with_request_id, request_id_middleware};

use super::{handlers, AppState};

/// Creates the main API router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        // Platforms
        .route("/platforms", get(handlers::get_platforms))
        .route("/platforms/:id/toggle", post(handlers::toggle_platform))
        // User preferences
        .route(
            "/preferences",
            get(handlers::get_preferences).put(handlers::update_preferences),
        )
        // Shuffle
        .route("/shuffle", post(handlers::shuffle))
        .route("/history", get(handlers::get_history))
        // Session view-model
        .route("/session", get(handlers::get_session))
        .route("/session/launch", post(handlers::launch_content))
        // Engagement widgets
        .route("/stats/recap", get(handlers::get_recap))
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
