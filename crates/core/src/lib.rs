//! Domain types and pure competition logic.
//!
//! Nothing in this crate performs I/O. The database and HTTP layers load
//! data, hand it to these functions, and persist or render what comes back.

pub mod error;
pub mod finals;
pub mod leaderboard;
pub mod schedule;
pub mod standings;
pub mod types;
pub mod validation;
