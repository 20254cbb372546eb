//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity is mutable
//!
//! JSON field names are camelCase to match the public wire format.

pub mod fixture;
pub mod match_result;
pub mod player;
pub mod team;
