//! Handlers for the league table.

use axum::extract::{Query, State};
use axum::Json;
use league_core::standings::{
    compute_standings, MatchRecord, RosterTeam, StandingsOptions, StandingsRow, StandingsSource,
};
use league_db::repositories::{FixtureRepo, MatchResultRepo, TeamRepo};
use league_db::DbPool;

use crate::error::AppResult;
use crate::query::StandingsParams;
use crate::state::AppState;

/// Load the chosen match log and the roster, then rank.
///
/// Shared by `GET /standings` and finals generation so both see the same
/// table.
pub async fn current_table(
    pool: &DbPool,
    source: StandingsSource,
    options: &StandingsOptions,
) -> AppResult<Vec<StandingsRow>> {
    let matches: Vec<MatchRecord> = match source {
        StandingsSource::Results => MatchResultRepo::list(pool)
            .await?
            .iter()
            .map(|r| r.to_match_record())
            .collect(),
        StandingsSource::Fixtures => FixtureRepo::list_played(pool)
            .await?
            .iter()
            .filter_map(|f| f.to_match_record())
            .collect(),
    };

    let roster: Vec<RosterTeam> = TeamRepo::list(pool)
        .await?
        .iter()
        .map(|t| t.to_roster())
        .collect();

    let table = compute_standings(&matches, &roster, options)?;
    tracing::debug!(
        ?source,
        matches = matches.len(),
        rows = table.len(),
        "Computed standings"
    );
    Ok(table)
}

/// GET /api/v1/standings?source=results&includeZeroMatchTeams=false
///
/// Query parameters override the configured defaults for this request only.
pub async fn get_table(
    State(state): State<AppState>,
    Query(params): Query<StandingsParams>,
) -> AppResult<Json<Vec<StandingsRow>>> {
    let config = &state.config.standings;
    let source = params.source.unwrap_or(config.source);
    let options = config.options(params.include_zero_match_teams);

    let table = current_table(&state.pool, source, &options).await?;
    Ok(Json(table))
}
