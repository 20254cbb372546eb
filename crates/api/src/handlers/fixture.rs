//! Handlers for the `/fixtures` resource, including finals generation.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use league_core::error::CoreError;
use league_core::finals::{generate_finals, stage_name};
use league_core::schedule::round_robin;
use league_core::types::DbId;
use league_core::validation::{validate_fixture, validate_score};
use league_db::commands::ReplaceFixturesWithFinals;
use league_db::models::fixture::{CreateFixture, Fixture, RecordScore};
use league_db::repositories::{FixtureRepo, TeamRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::standings::current_table;
use crate::state::AppState;

/// A fixture with its display stage ("Round 2", "Final", ...).
#[derive(Debug, Serialize)]
pub struct FixtureView {
    #[serde(flatten)]
    pub fixture: Fixture,
    pub stage: String,
}

fn with_stages(fixtures: Vec<Fixture>) -> Vec<FixtureView> {
    fixtures
        .into_iter()
        .map(|fixture| FixtureView {
            stage: stage_name(fixture.round, fixture.stage()),
            fixture,
        })
        .collect()
}

/// GET /api/v1/fixtures
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FixtureView>>> {
    let fixtures = FixtureRepo::list(&state.pool).await?;
    Ok(Json(with_stages(fixtures)))
}

/// POST /api/v1/fixtures
///
/// Bulk insert. The body must be a JSON array of fixtures; the batch is
/// stored atomically.
pub async fn create_many(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> AppResult<(StatusCode, Json<Vec<Fixture>>)> {
    if !body.is_array() {
        return Err(AppError::BadRequest(
            "Expected an array of fixtures".to_string(),
        ));
    }
    let inputs: Vec<CreateFixture> = serde_json::from_value(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid fixture: {e}")))?;

    for input in &inputs {
        validate_fixture(input.round, &input.home, &input.away)?;
    }

    let created = FixtureRepo::create_many(&state.pool, &inputs).await?;
    tracing::info!(count = created.len(), "Fixtures created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/v1/fixtures/round-robin
///
/// Seed a single round-robin over every team in the roster. Existing
/// fixtures are kept.
pub async fn seed_round_robin(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<Fixture>>)> {
    let names: Vec<String> = TeamRepo::list(&state.pool)
        .await?
        .into_iter()
        .map(|t| t.name)
        .collect();

    let inputs: Vec<CreateFixture> = round_robin(&names)?
        .into_iter()
        .map(|m| CreateFixture {
            round: m.round,
            home: m.home,
            away: m.away,
            date: None,
        })
        .collect();

    let created = FixtureRepo::create_many(&state.pool, &inputs).await?;
    tracing::info!(teams = names.len(), count = created.len(), "Round-robin seeded");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /api/v1/fixtures/{id}/score
pub async fn record_score(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<RecordScore>,
) -> AppResult<Json<Fixture>> {
    validate_score(input.home_score, input.away_score)?;
    let fixture = FixtureRepo::record_score(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Fixture",
            id,
        }))?;
    Ok(Json(fixture))
}

/// DELETE /api/v1/fixtures/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = FixtureRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Fixture",
            id,
        }))
    }
}

/// POST|PUT /api/v1/fixtures/finals
///
/// Replace all fixtures with the final (1st v 2nd) and third-place match
/// (3rd v 4th) seeded from the current table. With fewer than four ranked
/// teams nothing is touched and 400 is returned.
pub async fn generate(
    State(state): State<AppState>,
) -> AppResult<(StatusCode, Json<Vec<FixtureView>>)> {
    let config = &state.config.standings;
    let table = current_table(&state.pool, config.source, &config.options(None)).await?;

    let pairings = generate_finals(&table)?;
    let fixtures = ReplaceFixturesWithFinals::new(pairings)
        .execute(&state.pool)
        .await?;

    Ok((StatusCode::CREATED, Json(with_stages(fixtures))))
}
