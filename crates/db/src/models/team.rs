//! Team entity model and DTOs.

use league_core::standings::RosterTeam;
use league_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub logo: Option<String>,
    #[serde(skip)]
    pub created_at: Timestamp,
    #[serde(skip)]
    pub updated_at: Timestamp,
}

impl Team {
    pub fn to_roster(&self) -> RosterTeam {
        RosterTeam {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// DTO for creating a new team.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    pub logo: Option<String>,
}

/// DTO for updating an existing team. Identity is immutable.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub logo: Option<String>,
}
