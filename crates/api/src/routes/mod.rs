pub mod fixtures;
pub mod health;
pub mod players;
pub mod results;
pub mod standings;
pub mod teams;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /teams                      list, create
/// /teams/{id}                 get, update, delete
///
/// /results                    list, create (append-only)
///
/// /fixtures                   list, bulk create
/// /fixtures/round-robin       seed from roster (POST)
/// /fixtures/finals            replace all with finals (POST, PUT)
/// /fixtures/{id}              delete
/// /fixtures/{id}/score        record score (PUT)
///
/// /standings                  league table (GET)
///
/// /players                    list, create
/// /players/leaderboard        ranked by stat (GET)
/// /players/{id}               get, update, delete
/// /players/{id}/stats         increment counter (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/teams", teams::router())
        .nest("/results", results::router())
        .nest("/fixtures", fixtures::router())
        .nest("/standings", standings::router())
        .nest("/players", players::router())
}
