//! Route definitions for the league table.

use axum::routing::get;
use axum::Router;

use crate::handlers::standings;
use crate::state::AppState;

/// Routes mounted at `/standings`.
///
/// ```text
/// GET /   -> get_table
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(standings::get_table))
}
