//! Axum router construction for the action API.
//!
//! Assembles all routes into a single [`Router`] with CORS and request
//! tracing middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the action API.
///
/// The router includes:
/// - `GET /` -- minimal HTML status page
/// - `GET /api/time` -- current forest time
/// - `GET /api/help` -- the game guide
/// - `POST /api/players/{id}/start` -- first contact
/// - `GET /api/players/{id}` -- status report
/// - `POST /api/players/{id}/explore` -- exploration site menu
/// - `POST /api/players/{id}/explore/{site}` -- resolve an exploration
/// - `POST /api/players/{id}/stars` -- night star offer
/// - `POST /api/players/{id}/stars/catch` -- catch one star
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/time", get(handlers::get_time))
        .route("/api/help", get(handlers::get_help))
        .route("/api/players/{id}/start", post(handlers::start))
        .route("/api/players/{id}", get(handlers::status))
        .route("/api/players/{id}/explore", post(handlers::explore_menu))
        .route(
            "/api/players/{id}/explore/{site}",
            post(handlers::explore_site),
        )
        .route("/api/players/{id}/stars", post(handlers::stars_offer))
        .route("/api/players/{id}/stars/catch", post(handlers::stars_catch))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
