use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {entity} with name '{name}' already exists")]
    Conflict { entity: &'static str, name: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The store faulted or did not acknowledge a write.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub fn not_found(entity: &'static str, id: DbId) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn conflict(entity: &'static str, name: impl Into<String>) -> Self {
        Self::Conflict {
            entity,
            name: name.into(),
        }
    }
}
