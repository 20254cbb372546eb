//! Handlers for the `/results` resource.
//!
//! The result log is append-only: there are no update or delete handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use league_core::error::CoreError;
use league_core::standings::UnknownTeamPolicy;
use league_core::validation::validate_result;
use league_db::models::match_result::{CreateMatchResult, MatchResult};
use league_db::repositories::{MatchResultRepo, TeamRepo};

use crate::error::AppResult;
use crate::state::AppState;

/// POST /api/v1/results
///
/// Under the `reject` unknown-team policy, both teams must already exist.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMatchResult>,
) -> AppResult<(StatusCode, Json<MatchResult>)> {
    validate_result(
        &input.home_team,
        &input.away_team,
        input.home_goals,
        input.away_goals,
    )?;

    if state.config.standings.unknown_teams == UnknownTeamPolicy::Reject {
        let teams = TeamRepo::list(&state.pool).await?;
        for name in [input.home_team.trim(), input.away_team.trim()] {
            if !teams.iter().any(|t| t.name == name) {
                return Err(CoreError::Validation(format!("Unknown team '{name}'")).into());
            }
        }
    }

    let result = MatchResultRepo::create(&state.pool, &input).await?;
    tracing::info!(
        result_id = result.id,
        home = %result.home_team,
        away = %result.away_team,
        home_goals = result.home_goals,
        away_goals = result.away_goals,
        "Result recorded"
    );
    Ok((StatusCode::CREATED, Json(result)))
}

/// GET /api/v1/results
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<MatchResult>>> {
    let results = MatchResultRepo::list(&state.pool).await?;
    Ok(Json(results))
}
