//! Multi-statement write commands.
//!
//! A command is built from already-validated domain output and applied with
//! `execute`, which runs every statement inside one transaction.

use league_core::finals::FinalsPairing;
use sqlx::PgPool;

use crate::models::fixture::Fixture;
use crate::repositories::fixture_repo::COLUMNS;

/// Replace every scheduled fixture with the two finals fixtures.
///
/// Destructive: all existing fixtures are deleted, including any recorded
/// scores. The table lock serialises concurrent runs, and the delete and
/// inserts commit together, so a failed or retried run never leaves the
/// table half-replaced.
#[derive(Debug, Clone)]
pub struct ReplaceFixturesWithFinals {
    pairings: [FinalsPairing; 2],
}

impl ReplaceFixturesWithFinals {
    pub fn new(pairings: [FinalsPairing; 2]) -> Self {
        Self { pairings }
    }

    pub fn pairings(&self) -> &[FinalsPairing; 2] {
        &self.pairings
    }

    /// Apply the command, returning the inserted fixtures in seed order. Each
    /// fixture stores its finals stage.
    pub async fn execute(&self, pool: &PgPool) -> Result<Vec<Fixture>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("LOCK TABLE fixtures IN SHARE ROW EXCLUSIVE MODE")
            .execute(&mut *tx)
            .await?;

        let deleted = sqlx::query("DELETE FROM fixtures")
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let query = format!(
            "INSERT INTO fixtures (round, home, away, finals_stage) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        let mut inserted = Vec::with_capacity(self.pairings.len());
        for pairing in &self.pairings {
            let fixture = sqlx::query_as::<_, Fixture>(&query)
                .bind(pairing.round)
                .bind(&pairing.home)
                .bind(&pairing.away)
                .bind(pairing.stage.as_str())
                .fetch_one(&mut *tx)
                .await?;
            inserted.push(fixture);
        }

        tx.commit().await?;

        tracing::info!(
            deleted,
            inserted = inserted.len(),
            "Replaced fixtures with finals"
        );
        Ok(inserted)
    }
}
