//! Entity record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque caller identity (a principal/address string supplied by the harness).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Principal(String);

impl Principal {
    /// Returns the principal as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Principal {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A creative-writing project. Top-level entity; never deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Project {
    /// Globally unique project id, assigned monotonically starting at 1
    pub id: u64,
    /// Identity recorded at creation; the only principal allowed to add children
    pub owner: Principal,
    /// Project title
    pub title: String,
}

/// A character within a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Character {
    /// Owning project
    pub project_id: u64,
    /// Character id, unique within the project, starting at 1
    pub id: u64,
    /// Character name
    pub name: String,
    /// Free-form description, wide character set
    pub description: String,
}

/// A timeline event within a project.
///
/// The timestamp is a caller-supplied ordering value; the registry does not
/// enforce monotonicity across a project's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TimelineEvent {
    /// Owning project
    pub project_id: u64,
    /// Event id, unique within the project, starting at 1
    pub id: u64,
    /// Event title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Caller-supplied ordering value
    pub timestamp: u64,
}

/// A relationship between two characters of the same project.
///
/// Both endpoints must reference characters that already exist within the
/// project. The two endpoints may be the same character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CharacterRelationship {
    /// Owning project
    pub project_id: u64,
    /// Relationship id, unique within the project, starting at 1
    pub id: u64,
    /// First endpoint character id
    pub character1_id: u64,
    /// Second endpoint character id
    pub character2_id: u64,
    /// Short label, e.g. "Siblings"
    pub relationship_type: String,
    /// Free-form description
    pub description: String,
}
