//! Validation of text arguments against the configured bounds.

use crate::error::RegistryError;

/// Validates a short text field (title, name, relationship type).
///
/// Short text must be ASCII and at most `max_len` bytes. Runs before any
/// allocation or write, so a rejected argument leaves no trace in the store.
pub(crate) fn validate_short_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), RegistryError> {
    if !value.is_ascii() {
        return Err(RegistryError::InvalidInput {
            field,
            reason: "must be ASCII".to_string(),
        });
    }
    if value.len() > max_len {
        return Err(RegistryError::InvalidInput {
            field,
            reason: format!("length {} exceeds maximum {}", value.len(), max_len),
        });
    }
    Ok(())
}

/// Validates a long text field (descriptions).
///
/// Long text may use the full character set but is bounded in characters.
pub(crate) fn validate_long_text(
    field: &'static str,
    value: &str,
    max_len: usize,
) -> Result<(), RegistryError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(RegistryError::InvalidInput {
            field,
            reason: format!("length {} exceeds maximum {}", len, max_len),
        });
    }
    Ok(())
}
