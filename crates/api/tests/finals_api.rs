//! HTTP tests for finals generation.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_empty, post_json, put_empty};
use serde_json::{json, Value};
use sqlx::PgPool;

/// A double round-robin ending Wolves 10, Xanthi 8, York 8, Zenit 5, with
/// Xanthi ahead of York on goal difference.
async fn seed_four_team_season(pool: &PgPool) {
    let results = [
        ("Wolves", "Xanthi", 0, 0),
        ("Xanthi", "Wolves", 0, 1),
        ("Wolves", "York", 1, 1),
        ("York", "Wolves", 0, 0),
        ("Wolves", "Zenit", 0, 0),
        ("Zenit", "Wolves", 0, 1),
        ("Xanthi", "York", 1, 2),
        ("York", "Xanthi", 0, 1),
        ("Xanthi", "Zenit", 0, 0),
        ("Zenit", "Xanthi", 1, 2),
        ("York", "Zenit", 1, 0),
        ("Zenit", "York", 2, 0),
    ];
    for (home, away, hg, ag) in results {
        common::record_result(pool, home, away, hg, ag).await;
    }
}

fn pairings(fixtures: &Value) -> Vec<(i64, &str, &str)> {
    fixtures
        .as_array()
        .unwrap()
        .iter()
        .map(|f| {
            (
                f["round"].as_i64().unwrap(),
                f["home"].as_str().unwrap(),
                f["away"].as_str().unwrap(),
            )
        })
        .collect()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn three_teams_is_not_enough(pool: PgPool) {
    common::record_result(&pool, "A", "B", 1, 0).await;
    common::record_result(&pool, "B", "C", 1, 0).await;
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/fixtures",
        json!([{ "round": 1, "home": "A", "away": "C" }]),
    )
    .await;

    let response = post_empty(common::build_test_app(pool.clone()), "/api/v1/fixtures/finals").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["error"],
        "Not enough teams for finals"
    );

    let fixtures = body_json(get(common::build_test_app(pool), "/api/v1/fixtures").await).await;
    assert_eq!(pairings(&fixtures), [(1, "A", "C")]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn finals_follow_the_table_and_replace_fixtures(pool: PgPool) {
    seed_four_team_season(&pool).await;
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/fixtures",
        json!([
            { "round": 1, "home": "Wolves", "away": "Zenit" },
            { "round": 2, "home": "York", "away": "Xanthi" }
        ]),
    )
    .await;

    let table = body_json(get(common::build_test_app(pool.clone()), "/api/v1/standings").await).await;
    let points: Vec<(&str, i64)> = table
        .as_array()
        .unwrap()
        .iter()
        .map(|r| (r["team"].as_str().unwrap(), r["points"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        points,
        [("Wolves", 10), ("Xanthi", 8), ("York", 8), ("Zenit", 5)]
    );

    let response = post_empty(common::build_test_app(pool.clone()), "/api/v1/fixtures/finals").await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    assert_eq!(
        pairings(&created),
        [(4, "Wolves", "Xanthi"), (4, "York", "Zenit")]
    );
    assert_eq!(created[0]["status"], "pending");
    assert_eq!(created[0]["stage"], "Final");
    assert_eq!(created[1]["stage"], "Third Place Match");

    let fixtures = body_json(get(common::build_test_app(pool), "/api/v1/fixtures").await).await;
    assert_eq!(
        pairings(&fixtures),
        [(4, "Wolves", "Xanthi"), (4, "York", "Zenit")]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn put_and_repeat_runs_keep_two_fixtures(pool: PgPool) {
    seed_four_team_season(&pool).await;

    let response = put_empty(common::build_test_app(pool.clone()), "/api/v1/fixtures/finals").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_empty(common::build_test_app(pool.clone()), "/api/v1/fixtures/finals").await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let fixtures = body_json(get(common::build_test_app(pool), "/api/v1/fixtures").await).await;
    assert_eq!(
        pairings(&fixtures),
        [(4, "Wolves", "Xanthi"), (4, "York", "Zenit")]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn third_place_keeps_its_label_after_final_is_deleted(pool: PgPool) {
    seed_four_team_season(&pool).await;

    let created = body_json(
        post_empty(common::build_test_app(pool.clone()), "/api/v1/fixtures/finals").await,
    )
    .await;
    let final_id = created[0]["id"].as_i64().unwrap();

    let response = delete(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/fixtures/{final_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let fixtures = body_json(get(common::build_test_app(pool), "/api/v1/fixtures").await).await;
    assert_eq!(pairings(&fixtures), [(4, "York", "Zenit")]);
    assert_eq!(fixtures[0]["stage"], "Third Place Match");
    assert_eq!(fixtures[0]["finalsStage"], "third_place");
}
