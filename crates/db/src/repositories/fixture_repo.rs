//! Repository for the `fixtures` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::fixture::{CreateFixture, Fixture, RecordScore, STATUS_PLAYED};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, round, home, away, date, status, home_score, away_score, finals_stage";

/// Provides CRUD operations for fixtures.
pub struct FixtureRepo;

impl FixtureRepo {
    /// Insert a batch of fixtures in one transaction, preserving input order.
    ///
    /// Either every fixture is stored or none is.
    pub async fn create_many(
        pool: &PgPool,
        inputs: &[CreateFixture],
    ) -> Result<Vec<Fixture>, sqlx::Error> {
        let query = format!(
            "INSERT INTO fixtures (round, home, away, date) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );

        let mut tx = pool.begin().await?;
        let mut created = Vec::with_capacity(inputs.len());
        for input in inputs {
            let fixture = sqlx::query_as::<_, Fixture>(&query)
                .bind(input.round)
                .bind(input.home.trim())
                .bind(input.away.trim())
                .bind(input.date)
                .fetch_one(&mut *tx)
                .await?;
            created.push(fixture);
        }
        tx.commit().await?;

        Ok(created)
    }

    /// Find a fixture by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Fixture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fixtures WHERE id = $1");
        sqlx::query_as::<_, Fixture>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all fixtures ordered by round, then insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Fixture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fixtures ORDER BY round, id");
        sqlx::query_as::<_, Fixture>(&query).fetch_all(pool).await
    }

    /// List fixtures with a recorded score.
    pub async fn list_played(pool: &PgPool) -> Result<Vec<Fixture>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM fixtures WHERE status = $1 ORDER BY round, id");
        sqlx::query_as::<_, Fixture>(&query)
            .bind(STATUS_PLAYED)
            .fetch_all(pool)
            .await
    }

    /// Record a score and mark the fixture played.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn record_score(
        pool: &PgPool,
        id: DbId,
        input: &RecordScore,
    ) -> Result<Option<Fixture>, sqlx::Error> {
        let query = format!(
            "UPDATE fixtures SET \
                home_score = $2, \
                away_score = $3, \
                status = $4, \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Fixture>(&query)
            .bind(id)
            .bind(input.home_score)
            .bind(input.away_score)
            .bind(STATUS_PLAYED)
            .fetch_optional(pool)
            .await
    }

    /// Delete a single fixture.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM fixtures WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all fixtures.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fixtures")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}
