//! Registry error types.

use thiserror::Error;

use crate::entity::Principal;

/// Stable error code for malformed text arguments.
pub const ERR_INVALID_INPUT: u32 = 100;
/// Stable error code for a missing project or character.
pub const ERR_NOT_FOUND: u32 = 101;
/// Stable error code for a caller that is not the project owner.
pub const ERR_UNAUTHORIZED: u32 = 102;
/// Stable error code for internal failures outside the operation taxonomy.
pub const ERR_INTERNAL: u32 = 103;

/// Registry operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Referenced project does not exist
    #[error("Project {project_id} not found")]
    ProjectNotFound { project_id: u64 },

    /// Referenced character does not exist within the project
    #[error("Character {character_id} not found in project {project_id}")]
    CharacterNotFound { project_id: u64, character_id: u64 },

    /// Caller is not the recorded owner of the project
    #[error("Caller {caller} is not the owner of project {project_id}")]
    Unauthorized { project_id: u64, caller: Principal },

    /// Text argument violates its length or character-set bound
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// Payload serialization failed
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Lock poisoned (RwLock poisoned)
    #[error("Lock poisoned")]
    LockPoisoned,
}

impl RegistryError {
    /// Returns the stable numeric code for this error.
    ///
    /// Codes are part of the harness contract and must not change:
    /// 100 invalid-input, 101 not-found, 102 unauthorized.
    pub fn code(&self) -> u32 {
        match self {
            RegistryError::InvalidInput { .. } => ERR_INVALID_INPUT,
            RegistryError::ProjectNotFound { .. } => ERR_NOT_FOUND,
            RegistryError::CharacterNotFound { .. } => ERR_NOT_FOUND,
            RegistryError::Unauthorized { .. } => ERR_UNAUTHORIZED,
            RegistryError::SerializationError(_) => ERR_INTERNAL,
            RegistryError::LockPoisoned => ERR_INTERNAL,
        }
    }
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
