//! Shared query parameter types for API handlers.

use league_core::error::CoreError;
use league_core::leaderboard::PlayerStat;
use league_core::standings::StandingsSource;
use league_core::types::DbId;
use serde::Deserialize;

/// Default number of players returned by the leaderboard.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;
/// Maximum number of players returned by the leaderboard.
pub const MAX_LEADERBOARD_LIMIT: usize = 100;

/// `?source=&includeZeroMatchTeams=` overrides for the league table.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsParams {
    pub source: Option<StandingsSource>,
    pub include_zero_match_teams: Option<bool>,
}

/// `?teamId=` filter for player listings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFilterParams {
    pub team_id: Option<DbId>,
}

/// `?stat=&teamId=&limit=` for the player leaderboard.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardParams {
    pub stat: PlayerStat,
    pub team_id: Option<DbId>,
    pub limit: Option<usize>,
}

impl LeaderboardParams {
    /// Requested page size. Absent means [`DEFAULT_LEADERBOARD_LIMIT`]; values
    /// above [`MAX_LEADERBOARD_LIMIT`] are capped; zero is rejected.
    pub fn limit(&self) -> Result<usize, CoreError> {
        match self.limit {
            None => Ok(DEFAULT_LEADERBOARD_LIMIT),
            Some(0) => Err(CoreError::Validation(
                "limit must be at least 1".to_string(),
            )),
            Some(n) => Ok(n.min(MAX_LEADERBOARD_LIMIT)),
        }
    }
}
