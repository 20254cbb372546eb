use league_core::standings::{StandingsOptions, StandingsSource, UnknownTeamPolicy};

/// How the league table is computed unless a request overrides it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StandingsConfig {
    /// Which log the table is built from (default: results).
    pub source: StandingsSource,
    /// Show roster teams that have not played yet (default: `false`).
    pub include_zero_match_teams: bool,
    /// Handling of matches naming a team outside the roster (default: auto-register).
    pub unknown_teams: UnknownTeamPolicy,
}

impl StandingsConfig {
    /// Engine options, with an optional per-request override of the
    /// zero-match flag.
    pub fn options(&self, include_zero_match_teams: Option<bool>) -> StandingsOptions {
        StandingsOptions {
            include_zero_match_teams: include_zero_match_teams
                .unwrap_or(self.include_zero_match_teams),
            unknown_teams: self.unknown_teams,
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Upper bound on pooled database connections (default: `10`).
    pub db_max_connections: u32,
    pub standings: StandingsConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                    |
    /// |----------------------------|----------------------------|
    /// | `HOST`                     | `0.0.0.0`                  |
    /// | `PORT`                     | `3000`                     |
    /// | `CORS_ORIGINS`             | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                       |
    /// | `DB_MAX_CONNECTIONS`       | `10`                       |
    /// | `STANDINGS_SOURCE`         | `results`                  |
    /// | `INCLUDE_ZERO_MATCH_TEAMS` | `false`                    |
    /// | `UNKNOWN_TEAM_POLICY`      | `auto_register`            |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let source: StandingsSource = std::env::var("STANDINGS_SOURCE")
            .unwrap_or_else(|_| "results".into())
            .parse()
            .expect("STANDINGS_SOURCE must be 'results' or 'fixtures'");

        let include_zero_match_teams: bool = std::env::var("INCLUDE_ZERO_MATCH_TEAMS")
            .unwrap_or_else(|_| "false".into())
            .parse()
            .expect("INCLUDE_ZERO_MATCH_TEAMS must be 'true' or 'false'");

        let unknown_teams: UnknownTeamPolicy = std::env::var("UNKNOWN_TEAM_POLICY")
            .unwrap_or_else(|_| "auto_register".into())
            .parse()
            .expect("UNKNOWN_TEAM_POLICY must be 'auto_register' or 'reject'");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            db_max_connections,
            standings: StandingsConfig {
                source,
                include_zero_match_teams,
                unknown_teams,
            },
        }
    }
}
