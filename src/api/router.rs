//! API router.
//!
//! Layers (outermost → innermost): CORS → request trace → handler.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

/// Build the API router with every endpoint under `/api/`.
///
/// NOTE: Path params use `:param` syntax (matchit 0.7 / axum 0.7).
pub fn api_router(ctx: ApiContext) -> Router {
    let api = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/triage/classify", post(endpoints::triage::classify))
        .route("/triage/regions", post(endpoints::triage::regions))
        .route(
            "/triage/sessions/:id",
            get(endpoints::sessions::view).delete(endpoints::sessions::start_over),
        )
        .route(
            "/triage/sessions/:id/answer",
            post(endpoints::sessions::answer),
        )
        .route("/triage/sessions/:id/next", post(endpoints::sessions::next))
        .route(
            "/triage/sessions/:id/previous",
            post(endpoints::sessions::previous),
        )
        .with_state(ctx);

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
