//! Fixture entity model and DTOs.

use league_core::finals::FinalsStage;
use league_core::standings::MatchRecord;
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::match_result::goals;

/// Status of a fixture that has not been played yet.
pub const STATUS_PENDING: &str = "pending";
/// Status of a fixture with a recorded score.
pub const STATUS_PLAYED: &str = "played";

/// A row from the `fixtures` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    pub id: DbId,
    pub round: i32,
    pub home: String,
    pub away: String,
    pub date: Option<Timestamp>,
    pub status: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    /// `final` or `third_place` for fixtures created by finals generation.
    pub finals_stage: Option<String>,
}

impl Fixture {
    pub fn is_played(&self) -> bool {
        self.status == STATUS_PLAYED
    }

    /// The stored finals stage. Unrecognised values read as a league fixture.
    pub fn stage(&self) -> Option<FinalsStage> {
        self.finals_stage.as_deref().and_then(|s| s.parse().ok())
    }

    /// The fixture as a played match, or `None` if it has no score yet.
    pub fn to_match_record(&self) -> Option<MatchRecord> {
        match (self.is_played(), self.home_score, self.away_score) {
            (true, Some(home), Some(away)) => Some(MatchRecord::new(
                self.home.clone(),
                self.away.clone(),
                goals(home),
                goals(away),
            )),
            _ => None,
        }
    }
}

/// DTO for scheduling a fixture.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFixture {
    pub round: i32,
    pub home: String,
    pub away: String,
    pub date: Option<Timestamp>,
}

/// DTO for recording the score of a fixture. Marks it as played.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordScore {
    pub home_score: i32,
    pub away_score: i32,
}
