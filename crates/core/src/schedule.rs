//! Single round-robin fixture generation (circle method).

use std::collections::HashSet;

use serde::Serialize;

use crate::error::CoreError;

/// A generated match slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledMatch {
    pub round: i32,
    pub home: String,
    pub away: String,
}

/// Build a single round-robin where every pair of teams meets once.
///
/// The first team stays fixed while the rest rotate one slot per round. An
/// odd team count gets a bye slot, so one team sits out each round. Home
/// and away swap on alternate rounds. Rounds are numbered from 1.
pub fn round_robin(teams: &[String]) -> Result<Vec<ScheduledMatch>, CoreError> {
    if teams.len() < 2 {
        return Err(CoreError::Validation(
            "A round-robin needs at least 2 teams".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(teams.len());
    for team in teams {
        if !seen.insert(team.as_str()) {
            return Err(CoreError::Validation(format!(
                "Duplicate team in round-robin: '{team}'"
            )));
        }
    }

    let mut slots: Vec<Option<&str>> = teams.iter().map(|t| Some(t.as_str())).collect();
    if slots.len() % 2 == 1 {
        slots.push(None);
    }

    let n = slots.len();
    let mut matches = Vec::with_capacity(n / 2 * (n - 1));

    for round in 0..n - 1 {
        for i in 0..n / 2 {
            let (Some(a), Some(b)) = (slots[i], slots[n - 1 - i]) else {
                continue;
            };
            let (home, away) = if round % 2 == 0 { (a, b) } else { (b, a) };
            matches.push(ScheduledMatch {
                round: round as i32 + 1,
                home: home.to_string(),
                away: away.to_string(),
            });
        }
        slots[1..].rotate_right(1);
    }

    Ok(matches)
}
