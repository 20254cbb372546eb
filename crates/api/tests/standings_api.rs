//! HTTP tests for `GET /standings`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json, put_json};
use serde_json::{json, Value};
use sqlx::PgPool;

fn team_names(table: &Value) -> Vec<&str> {
    table
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["team"].as_str().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn table_from_results(pool: PgPool) {
    common::record_result(&pool, "TeamA", "TeamB", 2, 1).await;
    common::record_result(&pool, "TeamB", "TeamA", 1, 1).await;

    let response = get(common::build_test_app(pool), "/api/v1/standings").await;
    assert_eq!(response.status(), StatusCode::OK);

    let table = body_json(response).await;
    assert_eq!(
        table,
        json!([
            {
                "team": "TeamA", "played": 2, "wins": 1, "draws": 1, "losses": 0,
                "goalsFor": 3, "goalsAgainst": 2, "goalDifference": 1, "points": 4
            },
            {
                "team": "TeamB", "played": 2, "wins": 0, "draws": 1, "losses": 1,
                "goalsFor": 2, "goalsAgainst": 3, "goalDifference": -1, "points": 1
            }
        ])
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_league_has_empty_table(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/standings").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn roster_teams_carry_their_ids(pool: PgPool) {
    let id = common::create_team(&pool, "TeamA").await;
    common::record_result(&pool, "TeamA", "Visitors", 0, 0).await;

    let table = body_json(get(common::build_test_app(pool), "/api/v1/standings").await).await;

    let team_a = &table[0];
    assert_eq!(team_a["team"], "TeamA");
    assert_eq!(team_a["teamId"], id);
    assert_eq!(team_a["draws"], 1);
    assert_eq!(team_a["points"], 1);

    let visitors = &table[1];
    assert_eq!(visitors["team"], "Visitors");
    assert!(visitors.get("teamId").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn zero_match_teams_can_be_included(pool: PgPool) {
    common::create_team(&pool, "TeamA").await;
    common::create_team(&pool, "TeamB").await;
    common::create_team(&pool, "Idle").await;
    common::record_result(&pool, "TeamA", "TeamB", 1, 0).await;

    let table = body_json(get(common::build_test_app(pool.clone()), "/api/v1/standings").await).await;
    assert_eq!(team_names(&table), ["TeamA", "TeamB"]);

    let table = body_json(
        get(
            common::build_test_app(pool),
            "/api/v1/standings?includeZeroMatchTeams=true",
        )
        .await,
    )
    .await;
    assert_eq!(team_names(&table), ["TeamA", "Idle", "TeamB"]);
    assert_eq!(table[1]["played"], 0);
    assert_eq!(table[1]["points"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn ties_fall_back_to_goals_for_then_name(pool: PgPool) {
    // Everyone on 3 points and +1 goal difference; Gamma scored more.
    common::record_result(&pool, "Beta", "Loser1", 1, 0).await;
    common::record_result(&pool, "Alpha", "Loser2", 1, 0).await;
    common::record_result(&pool, "Gamma", "Loser3", 3, 2).await;

    let table = body_json(get(common::build_test_app(pool), "/api/v1/standings").await).await;
    assert_eq!(
        &team_names(&table)[..3],
        ["Gamma", "Alpha", "Beta"]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn fixtures_source_counts_only_played_fixtures(pool: PgPool) {
    let app = || common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app(),
            "/api/v1/fixtures",
            json!([
                { "round": 1, "home": "TeamA", "away": "TeamB" },
                { "round": 1, "home": "TeamC", "away": "TeamD" }
            ]),
        )
        .await,
    )
    .await;
    let first = created[0]["id"].as_i64().unwrap();

    put_json(
        app(),
        &format!("/api/v1/fixtures/{first}/score"),
        json!({ "homeScore": 0, "awayScore": 3 }),
    )
    .await;

    // The result log is empty, so the default source sees nothing.
    let table = body_json(get(app(), "/api/v1/standings").await).await;
    assert_eq!(table, json!([]));

    let table = body_json(get(app(), "/api/v1/standings?source=fixtures").await).await;
    assert_eq!(team_names(&table), ["TeamB", "TeamA"]);
    assert_eq!(table[0]["points"], 3);
    assert_eq!(table[0]["goalsFor"], 3);
    assert_eq!(table[1]["losses"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_source_is_rejected(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/v1/standings?source=rumours").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
