use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    /// The operation needs more data than is currently recorded
    /// (e.g. finals with fewer than four ranked teams).
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
