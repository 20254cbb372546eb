//! Input validators shared by the HTTP handlers.
//!
//! Each validator returns [`CoreError::Validation`] with a message suitable
//! for showing to the caller.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum length of a team name.
pub const MAX_TEAM_NAME_LEN: usize = 100;
/// Maximum length of a player name.
pub const MAX_PLAYER_NAME_LEN: usize = 100;

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

fn validate_name(value: &str, what: &str, max_len: usize) -> Result<(), CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{what} is required")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{what} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(())
}

fn validate_pairing(home: &str, away: &str) -> Result<(), CoreError> {
    validate_name(home, "Home team", MAX_TEAM_NAME_LEN)?;
    validate_name(away, "Away team", MAX_TEAM_NAME_LEN)?;
    if home.trim() == away.trim() {
        return Err(CoreError::Validation(
            "A team cannot play against itself".to_string(),
        ));
    }
    Ok(())
}

fn validate_goals(goals: i32, side: &str) -> Result<(), CoreError> {
    if goals < 0 {
        return Err(CoreError::Validation(format!(
            "{side} goals must be non-negative, got {goals}"
        )));
    }
    Ok(())
}

/// Validate a team name: non-blank and within length limits.
pub fn validate_team_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "Team name", MAX_TEAM_NAME_LEN)
}

/// Validate a player name: non-blank and within length limits.
pub fn validate_player_name(name: &str) -> Result<(), CoreError> {
    validate_name(name, "Player name", MAX_PLAYER_NAME_LEN)
}

/// Validate a recorded result.
pub fn validate_result(
    home: &str,
    away: &str,
    home_goals: i32,
    away_goals: i32,
) -> Result<(), CoreError> {
    validate_pairing(home, away)?;
    validate_score(home_goals, away_goals)
}

/// Validate a fixture before it is scheduled.
pub fn validate_fixture(round: i32, home: &str, away: &str) -> Result<(), CoreError> {
    if round < 1 {
        return Err(CoreError::Validation(format!(
            "Round must be at least 1, got {round}"
        )));
    }
    validate_pairing(home, away)
}

/// Validate a score recorded against a fixture.
pub fn validate_score(home_goals: i32, away_goals: i32) -> Result<(), CoreError> {
    validate_goals(home_goals, "Home")?;
    validate_goals(away_goals, "Away")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
