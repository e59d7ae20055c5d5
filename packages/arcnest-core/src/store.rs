//! Entity storage.
//!
//! Child entities are held in flat maps keyed by `(project_id, local_id)`
//! rather than nested containers, keeping every lookup an exact-key O(1)
//! probe and avoiding structural aliasing between a project and its
//! children. The counter table is part of the same state so allocation and
//! insert commit together.

use std::collections::HashMap;

use crate::config::RegistryConfig;
use crate::counter::CounterTable;
use crate::entity::{Character, CharacterRelationship, Project, TimelineEvent};

/// In-memory entity store: projects, their children, and the id counters.
#[derive(Debug, Default)]
pub struct EntityStore {
    /// Projects keyed by global project id
    projects: HashMap<u64, Project>,
    /// Characters keyed by (project id, character id)
    characters: HashMap<(u64, u64), Character>,
    /// Timeline events keyed by (project id, event id)
    events: HashMap<(u64, u64), TimelineEvent>,
    /// Relationships keyed by (project id, relationship id)
    relationships: HashMap<(u64, u64), CharacterRelationship>,
    /// Identifier counters, one per scope
    counters: CounterTable,
}

impl EntityStore {
    /// Creates an empty store sized for the configured project capacity.
    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            projects: HashMap::with_capacity(config.initial_project_capacity),
            ..Self::default()
        }
    }

    /// Inserts a project. The caller guarantees key uniqueness via the allocator.
    pub fn put_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Looks up a project by id. Absence is a normal, non-error outcome.
    pub fn get_project(&self, project_id: u64) -> Option<&Project> {
        self.projects.get(&project_id)
    }

    /// Inserts a character under its project.
    pub fn put_character(&mut self, character: Character) {
        self.characters
            .insert((character.project_id, character.id), character);
    }

    /// Looks up a character by its composite key.
    pub fn get_character(&self, project_id: u64, character_id: u64) -> Option<&Character> {
        self.characters.get(&(project_id, character_id))
    }

    /// Returns true if the character exists within the project.
    pub fn contains_character(&self, project_id: u64, character_id: u64) -> bool {
        self.characters.contains_key(&(project_id, character_id))
    }

    /// Inserts a timeline event under its project.
    pub fn put_event(&mut self, event: TimelineEvent) {
        self.events.insert((event.project_id, event.id), event);
    }

    /// Looks up a timeline event by its composite key.
    pub fn get_event(&self, project_id: u64, event_id: u64) -> Option<&TimelineEvent> {
        self.events.get(&(project_id, event_id))
    }

    /// Inserts a relationship under its project.
    pub fn put_relationship(&mut self, relationship: CharacterRelationship) {
        self.relationships
            .insert((relationship.project_id, relationship.id), relationship);
    }

    /// Looks up a relationship by its composite key.
    pub fn get_relationship(
        &self,
        project_id: u64,
        relationship_id: u64,
    ) -> Option<&CharacterRelationship> {
        self.relationships.get(&(project_id, relationship_id))
    }

    /// Read access to the counter table.
    pub fn counters(&self) -> &CounterTable {
        &self.counters
    }

    /// Write access to the counter table.
    pub fn counters_mut(&mut self) -> &mut CounterTable {
        &mut self.counters
    }
}
