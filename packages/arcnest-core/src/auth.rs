//! Owner authorization predicate.
//!
//! One auditable check consulted before every child mutation, rather than
//! inline comparisons scattered through the write paths. Pure function of
//! store state and caller identity; no side effects.

use crate::entity::Principal;
use crate::error::{RegistryError, Result};
use crate::store::EntityStore;

/// Asserts that `caller` is the recorded owner of `project_id`.
///
/// # Returns
/// `Ok(())` if the project exists and the caller owns it,
/// `Err(ProjectNotFound)` if the project does not exist,
/// `Err(Unauthorized)` if it exists under a different owner.
pub fn assert_owner(store: &EntityStore, project_id: u64, caller: &Principal) -> Result<()> {
    let project = store
        .get_project(project_id)
        .ok_or(RegistryError::ProjectNotFound { project_id })?;

    if project.owner != *caller {
        return Err(RegistryError::Unauthorized {
            project_id,
            caller: caller.clone(),
        });
    }
    Ok(())
}
