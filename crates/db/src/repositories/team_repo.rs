//! Repository for the `teams` table.

use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::team::{CreateTeam, Team, UpdateTeam};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, logo, created_at, updated_at";

/// Provides CRUD operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (name, logo) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(input.name.trim())
            .bind(&input.logo)
            .fetch_one(pool)
            .await
    }

    /// Find a team by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all teams ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams ORDER BY name, id");
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }

    /// Update a team. Only non-`None` fields are applied.
    ///
    /// A rename also rewrites the old name in `results` and `fixtures`, in
    /// the same transaction, so the team keeps its history. Returns `None`
    /// if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeam,
    ) -> Result<Option<Team>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let old_name: Option<String> =
            sqlx::query_scalar("SELECT name FROM teams WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(old_name) = old_name else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE teams SET \
                name = COALESCE($2, name), \
                logo = COALESCE($3, logo), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let team = sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.logo)
            .fetch_one(&mut *tx)
            .await?;

        if team.name != old_name {
            for statement in [
                "UPDATE results SET home_team = $2 WHERE home_team = $1",
                "UPDATE results SET away_team = $2 WHERE away_team = $1",
                "UPDATE fixtures SET home = $2, updated_at = NOW() WHERE home = $1",
                "UPDATE fixtures SET away = $2, updated_at = NOW() WHERE away = $1",
            ] {
                sqlx::query(statement)
                    .bind(&old_name)
                    .bind(&team.name)
                    .execute(&mut *tx)
                    .await?;
            }
            tracing::info!(team_id = id, from = %old_name, to = %team.name, "Team renamed");
        }

        tx.commit().await?;
        Ok(Some(team))
    }

    /// Whether any result or fixture names the team.
    pub async fn has_history(pool: &PgPool, name: &str) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM results WHERE home_team = $1 OR away_team = $1) \
                 OR EXISTS (SELECT 1 FROM fixtures WHERE home = $1 OR away = $1)",
        )
        .bind(name)
        .fetch_one(pool)
        .await
    }

    /// Delete a team. Results and fixtures referencing it by name are kept;
    /// players cascade.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
