//! Player entity model and DTOs.

use league_core::leaderboard::{PlayerStat, StatLine};
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub team_id: DbId,
    pub picture: Option<String>,
    pub goals: i32,
    pub assists: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

impl StatLine for Player {
    fn name(&self) -> &str {
        &self.name
    }

    fn stat(&self, stat: PlayerStat) -> i32 {
        match stat {
            PlayerStat::Goals => self.goals,
            PlayerStat::Assists => self.assists,
            PlayerStat::Yellow => self.yellow_cards,
            PlayerStat::Red => self.red_cards,
        }
    }
}

/// DTO for registering a player. Counters start at zero.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlayer {
    pub name: String,
    pub team_id: DbId,
    pub picture: Option<String>,
}

/// DTO for updating a player. Counters change only via stat increments.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub team_id: Option<DbId>,
    pub picture: Option<String>,
}

/// DTO for `PATCH /players/{id}/stats`.
#[derive(Debug, Clone, Deserialize)]
pub struct IncrementStat {
    pub stat: PlayerStat,
}
