//! Serial operation dispatch.

use std::sync::Arc;

use arcnest_core::{Registry, RegistryError};
use serde::Serialize;
use serde_json::Value;

use crate::op::{Operation, Receipt};
use crate::OpResult;

/// Applies operations against a shared registry, one at a time.
///
/// Operations submitted together are applied strictly in the order given;
/// each operation fully commits (allocation plus write) or fully fails
/// before the next begins.
pub struct Dispatcher {
    registry: Arc<Registry>,
}

impl Dispatcher {
    /// Creates a dispatcher over the given registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Returns the underlying registry.
    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Applies a single operation and returns its receipt.
    pub fn apply(&self, op: Operation) -> Receipt {
        let result = match op {
            Operation::CreateProject { caller, title } => self
                .registry
                .create_project(&caller, &title)
                .map(Value::from),
            Operation::GetProject { project_id } => {
                lookup_payload(self.registry.get_project(project_id))
            }
            Operation::AddCharacter {
                caller,
                project_id,
                name,
                description,
            } => self
                .registry
                .add_character(&caller, project_id, &name, &description)
                .map(Value::from),
            Operation::GetCharacter {
                project_id,
                character_id,
            } => lookup_payload(self.registry.get_character(project_id, character_id)),
            Operation::AddTimelineEvent {
                caller,
                project_id,
                title,
                description,
                timestamp,
            } => self
                .registry
                .add_timeline_event(&caller, project_id, &title, &description, timestamp)
                .map(Value::from),
            Operation::GetTimelineEvent {
                project_id,
                event_id,
            } => lookup_payload(self.registry.get_timeline_event(project_id, event_id)),
            Operation::AddCharacterRelationship {
                caller,
                project_id,
                character1_id,
                character2_id,
                relationship_type,
                description,
            } => self
                .registry
                .add_character_relationship(
                    &caller,
                    project_id,
                    character1_id,
                    character2_id,
                    &relationship_type,
                    &description,
                )
                .map(Value::from),
            Operation::GetCharacterRelationship {
                project_id,
                relationship_id,
            } => lookup_payload(
                self.registry
                    .get_character_relationship(project_id, relationship_id),
            ),
        };

        Receipt { result }
    }

    /// Applies a batch of operations in submission order.
    ///
    /// Receipts come back in the same order. A failed operation does not
    /// stop the batch; later operations still run against the state the
    /// earlier ones left behind.
    pub fn apply_batch(&self, ops: Vec<Operation>) -> Vec<Receipt> {
        let count = ops.len();
        let receipts = ops.into_iter().map(|op| self.apply(op)).collect();
        tracing::debug!("Applied batch of {} operations", count);
        receipts
    }
}

/// Converts a lookup result into its receipt payload: the entity as a
/// named-field object, or null when absent.
fn lookup_payload<T: Serialize>(result: Result<Option<T>, RegistryError>) -> OpResult {
    match result? {
        Some(entity) => {
            serde_json::to_value(entity).map_err(|e| RegistryError::SerializationError(e.to_string()))
        }
        None => Ok(Value::Null),
    }
}
