//! Repository for the `results` table.

use sqlx::PgPool;

use crate::models::match_result::{CreateMatchResult, MatchResult};

const COLUMNS: &str = "id, home_team, away_team, home_goals, away_goals, date";

/// Append and read the result log. There is no update or delete.
pub struct MatchResultRepo;

impl MatchResultRepo {
    /// Append a result, returning the stored row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMatchResult,
    ) -> Result<MatchResult, sqlx::Error> {
        let query = format!(
            "INSERT INTO results (home_team, away_team, home_goals, away_goals, date) \
             VALUES ($1, $2, $3, $4, COALESCE($5, NOW())) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MatchResult>(&query)
            .bind(input.home_team.trim())
            .bind(input.away_team.trim())
            .bind(input.home_goals)
            .bind(input.away_goals)
            .bind(input.date)
            .fetch_one(pool)
            .await
    }

    /// List every result, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<MatchResult>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM results ORDER BY date DESC, id DESC");
        sqlx::query_as::<_, MatchResult>(&query).fetch_all(pool).await
    }
}
