//! Route definitions for the `/results` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::match_result;
use crate::state::AppState;

/// Routes mounted at `/results`.
///
/// ```text
/// GET  /   -> list
/// POST /   -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(match_result::list).post(match_result::create))
}
