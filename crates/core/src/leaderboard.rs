//! Player stat counters and leaderboard ranking.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the per-player counters tracked over a season.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerStat {
    Goals,
    Assists,
    Yellow,
    Red,
}

/// Wire names accepted for [`PlayerStat`].
pub const VALID_STATS: &[&str] = &["goals", "assists", "yellow", "red"];

impl PlayerStat {
    /// The `players` column holding this counter.
    pub fn column(self) -> &'static str {
        match self {
            Self::Goals => "goals",
            Self::Assists => "assists",
            Self::Yellow => "yellow_cards",
            Self::Red => "red_cards",
        }
    }
}

impl FromStr for PlayerStat {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "goals" => Ok(Self::Goals),
            "assists" => Ok(Self::Assists),
            "yellow" => Ok(Self::Yellow),
            "red" => Ok(Self::Red),
            other => Err(CoreError::Validation(format!(
                "Unknown stat: '{other}'. Valid stats: {}",
                VALID_STATS.join(", ")
            ))),
        }
    }
}

/// Anything that can be placed on a leaderboard.
pub trait StatLine {
    fn name(&self) -> &str;
    fn stat(&self, stat: PlayerStat) -> i32;
}

/// Sort `players` by `stat` descending, ties by name ascending.
pub fn rank_by<T: StatLine>(players: &mut [T], stat: PlayerStat) {
    players.sort_by(|a, b| {
        b.stat(stat)
            .cmp(&a.stat(stat))
            .then_with(|| a.name().cmp(b.name()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: &'static str,
        goals: i32,
        red: i32,
    }

    impl StatLine for Line {
        fn name(&self) -> &str {
            self.name
        }

        fn stat(&self, stat: PlayerStat) -> i32 {
            match stat {
                PlayerStat::Goals => self.goals,
                PlayerStat::Red => self.red,
                _ => 0,
            }
        }
    }

    fn lines() -> Vec<Line> {
        vec![
            Line { name: "Cole", goals: 2, red: 1 },
            Line { name: "Abe", goals: 5, red: 0 },
            Line { name: "Bo", goals: 2, red: 3 },
        ]
    }

    #[test]
    fn ranks_by_requested_stat() {
        let mut players = lines();
        rank_by(&mut players, PlayerStat::Red);
        let order: Vec<_> = players.iter().map(|p| p.name).collect();
        assert_eq!(order, ["Bo", "Cole", "Abe"]);
    }

    #[test]
    fn ties_ranked_by_name() {
        let mut players = lines();
        rank_by(&mut players, PlayerStat::Goals);
        let order: Vec<_> = players.iter().map(|p| p.name).collect();
        assert_eq!(order, ["Abe", "Bo", "Cole"]);
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!("yellow".parse::<PlayerStat>().unwrap(), PlayerStat::Yellow);
        assert_eq!(PlayerStat::Yellow.column(), "yellow_cards");
        assert_eq!(PlayerStat::Red.column(), "red_cards");
        assert!("fouls".parse::<PlayerStat>().is_err());
    }
}
