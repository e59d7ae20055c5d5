//! Registry facade composing validation, authorization, allocation, and storage.
//!
//! Every mutation takes the store's write lock exactly once; validation and
//! authorization run before the identifier is allocated, so a failed call
//! leaves entities and counters untouched. The write-lock span is the
//! transaction boundary: allocation and insert commit together or not at all.

use std::sync::RwLock;

use crate::auth;
use crate::config::RegistryConfig;
use crate::counter::CounterScope;
use crate::entity::validation::{validate_long_text, validate_short_text};
use crate::entity::{Character, CharacterRelationship, Principal, Project, TimelineEvent};
use crate::error::{RegistryError, Result};
use crate::store::EntityStore;

/// The creative-writing project registry.
///
/// Writes are serialized through the store's write lock; reads take the read
/// lock and observe a consistent snapshot.
#[derive(Debug)]
pub struct Registry {
    /// Entity maps plus the identifier counter table, behind one lock
    state: RwLock<EntityStore>,
    /// Text bounds and sizing
    config: RegistryConfig,
}

impl Registry {
    /// Creates an empty registry with default configuration.
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Creates an empty registry with the given configuration.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            state: RwLock::new(EntityStore::with_config(&config)),
            config,
        }
    }

    /// Returns the registry configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Creates a new project owned by the caller.
    ///
    /// # Arguments
    /// * `caller` - Identity recorded as the project owner
    /// * `title` - Project title (short text)
    ///
    /// # Returns
    /// `Result<u64, RegistryError>` containing the new project id.
    pub fn create_project(&self, caller: &Principal, title: &str) -> Result<u64> {
        validate_short_text("title", title, self.config.max_short_text_len)?;

        let mut state = self.state.write().map_err(|_| RegistryError::LockPoisoned)?;
        let project_id = state.counters_mut().next(CounterScope::Projects);
        state.put_project(Project {
            id: project_id,
            owner: caller.clone(),
            title: title.to_string(),
        });

        tracing::debug!("Created project {} for {}", project_id, caller);
        Ok(project_id)
    }

    /// Looks up a project by id.
    ///
    /// # Returns
    /// `Ok(None)` if the project does not exist; lookups never error on absence.
    pub fn get_project(&self, project_id: u64) -> Result<Option<Project>> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.get_project(project_id).cloned())
    }

    /// Adds a character to a project. Owner-only.
    ///
    /// # Arguments
    /// * `caller` - Must be the project owner
    /// * `project_id` - Target project
    /// * `name` - Character name (short text)
    /// * `description` - Character description (long text)
    ///
    /// # Returns
    /// `Result<u64, RegistryError>` containing the new character id, unique
    /// within the project and starting at 1.
    pub fn add_character(
        &self,
        caller: &Principal,
        project_id: u64,
        name: &str,
        description: &str,
    ) -> Result<u64> {
        validate_short_text("name", name, self.config.max_short_text_len)?;
        validate_long_text("description", description, self.config.max_long_text_len)?;

        let mut state = self.state.write().map_err(|_| RegistryError::LockPoisoned)?;
        if let Err(err) = auth::assert_owner(&state, project_id, caller) {
            tracing::warn!("Rejected add_character on project {}: {}", project_id, err);
            return Err(err);
        }

        let character_id = state.counters_mut().next(CounterScope::Characters(project_id));
        state.put_character(Character {
            project_id,
            id: character_id,
            name: name.to_string(),
            description: description.to_string(),
        });

        tracing::debug!("Added character {} to project {}", character_id, project_id);
        Ok(character_id)
    }

    /// Looks up a character by project id and character id.
    pub fn get_character(&self, project_id: u64, character_id: u64) -> Result<Option<Character>> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.get_character(project_id, character_id).cloned())
    }

    /// Adds a timeline event to a project. Owner-only.
    ///
    /// # Arguments
    /// * `caller` - Must be the project owner
    /// * `project_id` - Target project
    /// * `title` - Event title (short text)
    /// * `description` - Event description (long text)
    /// * `timestamp` - Caller-supplied ordering value, not enforced monotonic
    ///
    /// # Returns
    /// `Result<u64, RegistryError>` containing the new event id.
    pub fn add_timeline_event(
        &self,
        caller: &Principal,
        project_id: u64,
        title: &str,
        description: &str,
        timestamp: u64,
    ) -> Result<u64> {
        validate_short_text("title", title, self.config.max_short_text_len)?;
        validate_long_text("description", description, self.config.max_long_text_len)?;

        let mut state = self.state.write().map_err(|_| RegistryError::LockPoisoned)?;
        if let Err(err) = auth::assert_owner(&state, project_id, caller) {
            tracing::warn!(
                "Rejected add_timeline_event on project {}: {}",
                project_id,
                err
            );
            return Err(err);
        }

        let event_id = state.counters_mut().next(CounterScope::Events(project_id));
        state.put_event(TimelineEvent {
            project_id,
            id: event_id,
            title: title.to_string(),
            description: description.to_string(),
            timestamp,
        });

        tracing::debug!("Added event {} to project {}", event_id, project_id);
        Ok(event_id)
    }

    /// Looks up a timeline event by project id and event id.
    pub fn get_timeline_event(&self, project_id: u64, event_id: u64) -> Result<Option<TimelineEvent>> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.get_event(project_id, event_id).cloned())
    }

    /// Adds a relationship between two characters of a project. Owner-only.
    ///
    /// Both endpoints must reference characters already existing within the
    /// project. The endpoints may be the same character.
    ///
    /// # Arguments
    /// * `caller` - Must be the project owner
    /// * `project_id` - Target project
    /// * `character1_id` - First endpoint
    /// * `character2_id` - Second endpoint
    /// * `relationship_type` - Short label, e.g. "Siblings"
    /// * `description` - Relationship description (long text)
    ///
    /// # Returns
    /// `Result<u64, RegistryError>` containing the new relationship id.
    pub fn add_character_relationship(
        &self,
        caller: &Principal,
        project_id: u64,
        character1_id: u64,
        character2_id: u64,
        relationship_type: &str,
        description: &str,
    ) -> Result<u64> {
        validate_short_text(
            "relationship_type",
            relationship_type,
            self.config.max_short_text_len,
        )?;
        validate_long_text("description", description, self.config.max_long_text_len)?;

        let mut state = self.state.write().map_err(|_| RegistryError::LockPoisoned)?;
        if let Err(err) = auth::assert_owner(&state, project_id, caller) {
            tracing::warn!(
                "Rejected add_character_relationship on project {}: {}",
                project_id,
                err
            );
            return Err(err);
        }

        // Referential integrity: both endpoints must already exist
        for character_id in [character1_id, character2_id] {
            if !state.contains_character(project_id, character_id) {
                return Err(RegistryError::CharacterNotFound {
                    project_id,
                    character_id,
                });
            }
        }

        let relationship_id = state
            .counters_mut()
            .next(CounterScope::Relationships(project_id));
        state.put_relationship(CharacterRelationship {
            project_id,
            id: relationship_id,
            character1_id,
            character2_id,
            relationship_type: relationship_type.to_string(),
            description: description.to_string(),
        });

        tracing::debug!(
            "Added relationship {} ({} - {}) to project {}",
            relationship_id,
            character1_id,
            character2_id,
            project_id
        );
        Ok(relationship_id)
    }

    /// Looks up a relationship by project id and relationship id.
    pub fn get_character_relationship(
        &self,
        project_id: u64,
        relationship_id: u64,
    ) -> Result<Option<CharacterRelationship>> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.get_relationship(project_id, relationship_id).cloned())
    }

    /// Returns the number of projects ever created.
    pub fn project_count(&self) -> Result<u64> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.counters().peek(CounterScope::Projects))
    }

    /// Returns the number of characters ever added to a project.
    pub fn character_count(&self, project_id: u64) -> Result<u64> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.counters().peek(CounterScope::Characters(project_id)))
    }

    /// Returns the number of timeline events ever added to a project.
    pub fn event_count(&self, project_id: u64) -> Result<u64> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.counters().peek(CounterScope::Events(project_id)))
    }

    /// Returns the number of relationships ever added to a project.
    pub fn relationship_count(&self, project_id: u64) -> Result<u64> {
        let state = self.state.read().map_err(|_| RegistryError::LockPoisoned)?;
        Ok(state.counters().peek(CounterScope::Relationships(project_id)))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
