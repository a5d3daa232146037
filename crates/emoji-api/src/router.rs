//! Axum router construction.
//!
//! Assembles the three emoji routes into a single [`Router`] wrapped in
//! the CORS and request-trace middleware.

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderValue, Method};
use axum::routing::{delete, get};
use emoji_db::EmojiRepository;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /emojis` -- list emojis
/// - `POST /emojis` -- add an emoji
/// - `DELETE /emojis/{id}` -- delete an emoji
///
/// The CORS layer wraps every route and the fallbacks, so unknown paths
/// and wrong methods also carry CORS headers, and any `OPTIONS` request
/// is answered by the layer without reaching a handler.
pub fn build_router<R: EmojiRepository>(state: Arc<AppState<R>>) -> Router {
    let cors = cors_layer(state.allowed_origin.clone());

    Router::new()
        .route(
            "/emojis",
            get(handlers::get_emojis::<R>).post(handlers::add_emoji::<R>),
        )
        .route("/emojis/{id}", delete(handlers::delete_emoji::<R>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the browser client.
///
/// Request headers are mirrored instead of answered with a literal `*`,
/// which browsers reject when credentials are allowed.
pub fn cors_layer(origin: HeaderValue) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
