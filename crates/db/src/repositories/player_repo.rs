//! Repository for the `players` table.

use league_core::leaderboard::PlayerStat;
use league_core::types::DbId;
use sqlx::PgPool;

use crate::models::player::{CreatePlayer, Player, UpdatePlayer};

const COLUMNS: &str = "id, name, team_id, picture, goals, assists, yellow_cards, red_cards, \
                       created_at, updated_at";

/// Provides CRUD and stat operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player with all counters at zero.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (name, team_id, picture) VALUES ($1, $2, $3) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(input.name.trim())
            .bind(input.team_id)
            .bind(&input.picture)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List players, optionally restricted to one team. Ordered by name.
    pub async fn list(pool: &PgPool, team_id: Option<DbId>) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players \
             WHERE ($1::BIGINT IS NULL OR team_id = $1) \
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }

    /// Update a player. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlayer,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET \
                name = COALESCE($2, name), \
                team_id = COALESCE($3, team_id), \
                picture = COALESCE($4, picture), \
                updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(input.team_id)
            .bind(&input.picture)
            .fetch_optional(pool)
            .await
    }

    /// Add one to a single counter.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn increment_stat(
        pool: &PgPool,
        id: DbId,
        stat: PlayerStat,
    ) -> Result<Option<Player>, sqlx::Error> {
        // The column name comes from a closed enum, never from input.
        let column = stat.column();
        let query = format!(
            "UPDATE players SET {column} = {column} + 1, updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
