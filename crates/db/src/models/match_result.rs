//! Result entity model and DTOs.
//!
//! Results are append-only: there is a create DTO but no update DTO.

use league_core::standings::MatchRecord;
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `results` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub id: DbId,
    pub home_team: String,
    pub away_team: String,
    pub home_goals: i32,
    pub away_goals: i32,
    pub date: Timestamp,
}

impl MatchResult {
    pub fn to_match_record(&self) -> MatchRecord {
        MatchRecord::new(
            self.home_team.clone(),
            self.away_team.clone(),
            goals(self.home_goals),
            goals(self.away_goals),
        )
    }
}

/// DTO for recording a played match. `date` defaults to now.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMatchResult {
    pub home_team: String,
    pub away_team: String,
    pub home_goals: i32,
    pub away_goals: i32,
    pub date: Option<Timestamp>,
}

/// Convert a stored goal count.
///
/// Every goal and score column carries a `>= 0` CHECK constraint, so a
/// negative value cannot be read back and the zero fallback never applies.
pub(crate) fn goals(value: i32) -> u32 {
    u32::try_from(value).unwrap_or(0)
}
