//! League table computation.
//!
//! Folds a set of played matches into one [`StandingsRow`] per team and
//! ranks the rows. The same accumulation routine serves both match sources
//! (the append-only result log and the fixture log filtered to played
//! fixtures), so equivalent inputs always produce identical tables.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Points
// ---------------------------------------------------------------------------

/// Points awarded for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points awarded to each side for a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// A played match, independent of where it was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    pub home: String,
    pub away: String,
    pub home_goals: u32,
    pub away_goals: u32,
}

impl MatchRecord {
    pub fn new(
        home: impl Into<String>,
        away: impl Into<String>,
        home_goals: u32,
        away_goals: u32,
    ) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            home_goals,
            away_goals,
        }
    }
}

/// A team known to the competition, used to seed rows and attach ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterTeam {
    pub id: DbId,
    pub name: String,
}

/// Which log the table is computed from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StandingsSource {
    /// The immutable result log.
    #[default]
    Results,
    /// Fixtures whose status is `played`.
    Fixtures,
}

impl FromStr for StandingsSource {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "results" => Ok(Self::Results),
            "fixtures" => Ok(Self::Fixtures),
            other => Err(CoreError::Validation(format!(
                "Unknown standings source: '{other}'. Valid sources: results, fixtures"
            ))),
        }
    }
}

/// What to do with a match that names a team missing from the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownTeamPolicy {
    /// Give the team a transient row without an id.
    #[default]
    AutoRegister,
    /// Fail the computation.
    Reject,
}

impl FromStr for UnknownTeamPolicy {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto_register" => Ok(Self::AutoRegister),
            "reject" => Ok(Self::Reject),
            other => Err(CoreError::Validation(format!(
                "Unknown team policy: '{other}'. Valid policies: auto_register, reject"
            ))),
        }
    }
}

/// Knobs for [`compute_standings`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingsOptions {
    /// Seed a row for every roster team, including teams yet to play.
    pub include_zero_match_teams: bool,
    pub unknown_teams: UnknownTeamPolicy,
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// One team's season aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StandingsRow {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<DbId>,
    pub team: String,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goal_difference: i64,
    pub points: u32,
}

impl StandingsRow {
    pub fn new(team_id: Option<DbId>, team: impl Into<String>) -> Self {
        Self {
            team_id,
            team: team.into(),
            played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    fn record(&mut self, scored: u32, conceded: u32) {
        self.played += 1;
        self.goals_for += scored;
        self.goals_against += conceded;

        match scored.cmp(&conceded) {
            Ordering::Greater => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            Ordering::Less => self.losses += 1,
            Ordering::Equal => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
        }

        self.goal_difference = i64::from(self.goals_for) - i64::from(self.goals_against);
    }
}

// ---------------------------------------------------------------------------
// Accumulation
// ---------------------------------------------------------------------------

/// Rows keyed by team name, in insertion order.
#[derive(Debug, Default)]
pub struct Tally {
    rows: Vec<StandingsRow>,
    index: HashMap<String, usize>,
}

impl Tally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a row exists for `team`. An existing row keeps its stats; a
    /// missing id is filled in.
    pub fn seed(&mut self, team_id: Option<DbId>, team: &str) {
        let row = self.row_mut(team);
        if row.team_id.is_none() {
            row.team_id = team_id;
        }
    }

    /// Fold one match into both teams' rows, creating rows on first sight.
    pub fn accumulate(&mut self, home: &str, away: &str, home_goals: u32, away_goals: u32) {
        self.row_mut(home).record(home_goals, away_goals);
        self.row_mut(away).record(away_goals, home_goals);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the tally and return the ranked table.
    pub fn into_ranked(self) -> Vec<StandingsRow> {
        let mut rows = self.rows;
        rows.sort_by(compare_rows);
        rows
    }

    fn row_mut(&mut self, team: &str) -> &mut StandingsRow {
        let idx = match self.index.get(team) {
            Some(&idx) => idx,
            None => {
                self.rows.push(StandingsRow::new(None, team));
                let idx = self.rows.len() - 1;
                self.index.insert(team.to_string(), idx);
                idx
            }
        };
        &mut self.rows[idx]
    }
}

/// Table ordering: points, then goal difference, then goals for (all
/// descending), then team name ascending.
pub fn compare_rows(a: &StandingsRow, b: &StandingsRow) -> Ordering {
    b.points
        .cmp(&a.points)
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| a.team.cmp(&b.team))
}

/// Compute the ranked league table.
///
/// An empty roster means the roster is unknown: every team named by a match
/// gets a row regardless of [`UnknownTeamPolicy`].
pub fn compute_standings(
    matches: &[MatchRecord],
    roster: &[RosterTeam],
    options: &StandingsOptions,
) -> Result<Vec<StandingsRow>, CoreError> {
    let ids: HashMap<&str, DbId> = roster.iter().map(|t| (t.name.as_str(), t.id)).collect();
    let mut tally = Tally::new();

    if options.include_zero_match_teams {
        for team in roster {
            tally.seed(Some(team.id), &team.name);
        }
    }

    for m in matches {
        if !roster.is_empty() && options.unknown_teams == UnknownTeamPolicy::Reject {
            for name in [&m.home, &m.away] {
                if !ids.contains_key(name.as_str()) {
                    return Err(CoreError::Validation(format!(
                        "Match references unknown team '{name}'"
                    )));
                }
            }
        }

        tally.seed(ids.get(m.home.as_str()).copied(), &m.home);
        tally.seed(ids.get(m.away.as_str()).copied(), &m.away);
        tally.accumulate(&m.home, &m.away, m.home_goals, m.away_goals);
    }

    Ok(tally.into_ranked())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
