//! Operation and receipt types.

use arcnest_core::Principal;
use serde::{Deserialize, Serialize};

use crate::OpResult;

/// One registry operation as submitted by the harness.
///
/// Serializes with the public operation and argument names, e.g.
/// `{"op": "add-character", "caller": "deployer", "project-id": 1, ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", rename_all_fields = "kebab-case")]
pub enum Operation {
    /// Create a project owned by the caller
    CreateProject { caller: Principal, title: String },
    /// Look up a project
    GetProject { project_id: u64 },
    /// Add a character to a project (owner-only)
    AddCharacter {
        caller: Principal,
        project_id: u64,
        name: String,
        description: String,
    },
    /// Look up a character
    GetCharacter { project_id: u64, character_id: u64 },
    /// Add a timeline event to a project (owner-only)
    AddTimelineEvent {
        caller: Principal,
        project_id: u64,
        title: String,
        description: String,
        timestamp: u64,
    },
    /// Look up a timeline event
    GetTimelineEvent { project_id: u64, event_id: u64 },
    /// Add a relationship between two existing characters (owner-only)
    AddCharacterRelationship {
        caller: Principal,
        project_id: u64,
        character1_id: u64,
        character2_id: u64,
        relationship_type: String,
        description: String,
    },
    /// Look up a relationship
    GetCharacterRelationship { project_id: u64, relationship_id: u64 },
}

impl Operation {
    /// Returns true if this operation mutates registry state.
    pub fn is_mutation(&self) -> bool {
        match self {
            Operation::CreateProject { .. } => true,
            Operation::AddCharacter { .. } => true,
            Operation::AddTimelineEvent { .. } => true,
            Operation::AddCharacterRelationship { .. } => true,
            Operation::GetProject { .. } => false,
            Operation::GetCharacter { .. } => false,
            Operation::GetTimelineEvent { .. } => false,
            Operation::GetCharacterRelationship { .. } => false,
        }
    }
}

/// Outcome of one dispatched operation.
///
/// Mutations carry the new identifier as a JSON uint; lookups carry the
/// entity as a named-field object, or null when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    /// Payload on success, registry error on failure
    pub result: OpResult,
}

impl Receipt {
    /// Returns the success payload, if any.
    pub fn value(&self) -> Option<&serde_json::Value> {
        self.result.as_ref().ok()
    }

    /// Returns the stable numeric error code, if the operation failed.
    pub fn err_code(&self) -> Option<u32> {
        self.result.as_ref().err().map(|err| err.code())
    }
}
