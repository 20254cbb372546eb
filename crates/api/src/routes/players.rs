//! Route definitions for the `/players` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::player;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /leaderboard   -> leaderboard
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// PATCH  /{id}/stats    -> increment_stat
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(player::list).post(player::create))
        .route("/leaderboard", get(player::leaderboard))
        .route(
            "/{id}",
            get(player::get_by_id)
                .put(player::update)
                .delete(player::delete),
        )
        .route("/{id}/stats", patch(player::increment_stat))
}
