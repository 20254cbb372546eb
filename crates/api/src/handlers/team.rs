//! Handlers for the `/teams` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use league_core::error::CoreError;
use league_core::standings::UnknownTeamPolicy;
use league_core::types::DbId;
use league_core::validation::validate_team_name;
use league_db::models::team::{CreateTeam, Team, UpdateTeam};
use league_db::repositories::TeamRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/v1/teams
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTeam>,
) -> AppResult<(StatusCode, Json<Team>)> {
    validate_team_name(&input.name)?;
    let team = TeamRepo::create(&state.pool, &input).await?;
    tracing::info!(team_id = team.id, name = %team.name, "Team created");
    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/v1/teams
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Team>>> {
    let teams = TeamRepo::list(&state.pool).await?;
    Ok(Json(teams))
}

/// GET /api/v1/teams/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Team>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// PUT /api/v1/teams/{id}
///
/// A rename carries the team's results and fixtures over to the new name.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTeam>,
) -> AppResult<Json<Team>> {
    if let Some(name) = &input.name {
        validate_team_name(name)?;
    }
    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;
    Ok(Json(team))
}

/// DELETE /api/v1/teams/{id}
///
/// Results and fixtures naming the team are left in place. Under the
/// `reject` unknown-team policy that history would make the table fail, so
/// a team that still has any is not deleted.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Team", id }))?;

    if state.config.standings.unknown_teams == UnknownTeamPolicy::Reject
        && TeamRepo::has_history(&state.pool, &team.name).await?
    {
        return Err(CoreError::Conflict(format!(
            "Team '{}' has recorded results or fixtures",
            team.name
        ))
        .into());
    }

    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(team_id = id, "Team deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Team", id }))
    }
}
