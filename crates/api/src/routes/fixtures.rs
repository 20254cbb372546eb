//! Route definitions for the `/fixtures` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::fixture;
use crate::state::AppState;

/// Routes mounted at `/fixtures`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create_many
/// POST   /round-robin   -> seed_round_robin
/// POST   /finals        -> generate
/// PUT    /finals        -> generate
/// DELETE /{id}          -> delete
/// PUT    /{id}/score    -> record_score
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fixture::list).post(fixture::create_many))
        .route("/round-robin", post(fixture::seed_round_robin))
        .route("/finals", post(fixture::generate).put(fixture::generate))
        .route("/{id}", delete(fixture::delete))
        .route("/{id}/score", put(fixture::record_score))
}
