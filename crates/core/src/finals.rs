//! Knockout seeding from the league table.
//!
//! The top four teams of a ranked table are paired into the final
//! (1st v 2nd) and the third-place match (3rd v 4th). Both fixtures sit at
//! [`FINAL_ROUND`] and carry their [`FinalsStage`], which is stored with the
//! fixture. A league round can share the round number, so the stage is never
//! inferred from it.

use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;
use crate::standings::StandingsRow;

/// Round number carried by finals fixtures.
pub const FINAL_ROUND: i32 = 4;

/// Number of ranked teams required to seed the finals.
pub const MIN_FINALS_TEAMS: usize = 4;

/// Message returned to callers when the table is too short.
pub const INSUFFICIENT_TEAMS_MESSAGE: &str = "Not enough teams for finals";

/// Which finals match a pairing belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FinalsStage {
    Final,
    ThirdPlace,
}

impl FinalsStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Final => "Final",
            Self::ThirdPlace => "Third Place Match",
        }
    }

    /// Value stored in the `fixtures.finals_stage` column.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Final => "final",
            Self::ThirdPlace => "third_place",
        }
    }
}

impl FromStr for FinalsStage {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "final" => Ok(Self::Final),
            "third_place" => Ok(Self::ThirdPlace),
            other => Err(CoreError::Validation(format!(
                "Unknown finals stage: '{other}'"
            ))),
        }
    }
}

/// A seeded finals match, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinalsPairing {
    pub stage: FinalsStage,
    pub round: i32,
    pub home: String,
    pub away: String,
}

/// Pair the top four teams of `table`.
///
/// `table` must already be ranked. Duplicate team names are skipped, so the
/// four seeds are always distinct teams.
pub fn generate_finals(table: &[StandingsRow]) -> Result<[FinalsPairing; 2], CoreError> {
    let mut seeds: Vec<&str> = Vec::with_capacity(MIN_FINALS_TEAMS);
    for row in table {
        if !seeds.contains(&row.team.as_str()) {
            seeds.push(&row.team);
        }
        if seeds.len() == MIN_FINALS_TEAMS {
            break;
        }
    }

    if seeds.len() < MIN_FINALS_TEAMS {
        return Err(CoreError::InsufficientData(
            INSUFFICIENT_TEAMS_MESSAGE.to_string(),
        ));
    }

    let pair = |stage, home: &str, away: &str| FinalsPairing {
        stage,
        round: FINAL_ROUND,
        home: home.to_string(),
        away: away.to_string(),
    };

    Ok([
        pair(FinalsStage::Final, seeds[0], seeds[1]),
        pair(FinalsStage::ThirdPlace, seeds[2], seeds[3]),
    ])
}

/// Display name for a fixture: the finals stage when it has one, otherwise
/// "Round N".
pub fn stage_name(round: i32, stage: Option<FinalsStage>) -> String {
    match stage {
        Some(stage) => stage.label().to_string(),
        None => format!("Round {round}"),
    }
}
