//! Handlers for the `/players` resource and the player leaderboard.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use league_core::error::CoreError;
use league_core::leaderboard::rank_by;
use league_core::types::DbId;
use league_core::validation::validate_player_name;
use league_db::models::player::{CreatePlayer, IncrementStat, Player, UpdatePlayer};
use league_db::repositories::{PlayerRepo, TeamRepo};
use league_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::query::{LeaderboardParams, TeamFilterParams};
use crate::state::AppState;

async fn ensure_team_exists(pool: &DbPool, team_id: DbId) -> AppResult<()> {
    TeamRepo::find_by_id(pool, team_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Team",
            id: team_id,
        }))?;
    Ok(())
}

fn player_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Player",
        id,
    })
}

/// POST /api/v1/players
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<(StatusCode, Json<Player>)> {
    validate_player_name(&input.name)?;
    ensure_team_exists(&state.pool, input.team_id).await?;

    let player = PlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(player_id = player.id, team_id = player.team_id, "Player created");
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/v1/players?teamId=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeamFilterParams>,
) -> AppResult<Json<Vec<Player>>> {
    let players = PlayerRepo::list(&state.pool, params.team_id).await?;
    Ok(Json(players))
}

/// GET /api/v1/players/leaderboard?stat=goals&teamId=&limit=10
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardParams>,
) -> AppResult<Json<Vec<Player>>> {
    let limit = params.limit()?;
    let mut players = PlayerRepo::list(&state.pool, params.team_id).await?;
    rank_by(&mut players, params.stat);
    players.truncate(limit);
    Ok(Json(players))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| player_not_found(id))?;
    Ok(Json(player))
}

/// PUT /api/v1/players/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<Json<Player>> {
    if let Some(name) = &input.name {
        validate_player_name(name)?;
    }
    if let Some(team_id) = input.team_id {
        ensure_team_exists(&state.pool, team_id).await?;
    }
    let player = PlayerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| player_not_found(id))?;
    Ok(Json(player))
}

/// PATCH /api/v1/players/{id}/stats
///
/// Increment a single counter by one.
pub async fn increment_stat(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<IncrementStat>,
) -> AppResult<Json<Player>> {
    let player = PlayerRepo::increment_stat(&state.pool, id, input.stat)
        .await?
        .ok_or_else(|| player_not_found(id))?;
    Ok(Json(player))
}

/// DELETE /api/v1/players/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PlayerRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(player_not_found(id))
    }
}
