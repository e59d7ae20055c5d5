//! End-to-end workflow tests.
//!
//! Full lifecycle scenarios: project creation, child entities, and reads
//! round-tripping the written data.

use arcnest_core::{Principal, Registry};

#[test]
fn test_create_project_and_read_back() -> anyhow::Result<()> {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel")?;
    assert_eq!(project_id, 1);

    let project = registry.get_project(1)?.unwrap();
    assert_eq!(project.id, 1);
    assert_eq!(project.owner, deployer);
    assert_eq!(project.title, "My Novel");
    Ok(())
}

#[test]
fn test_character_round_trip() -> anyhow::Result<()> {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel")?;
    let character_id =
        registry.add_character(&deployer, project_id, "John Doe", "A mysterious character")?;
    assert_eq!(character_id, 1);

    let character = registry.get_character(project_id, character_id)?.unwrap();
    assert_eq!(character.project_id, project_id);
    assert_eq!(character.id, character_id);
    assert_eq!(character.name, "John Doe");
    assert_eq!(character.description, "A mysterious character");
    Ok(())
}

#[test]
fn test_timeline_event_round_trip() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();
    let event_id = registry
        .add_timeline_event(&deployer, project_id, "Chapter 1", "The beginning", 1000)
        .unwrap();
    assert_eq!(event_id, 1);

    let event = registry.get_timeline_event(project_id, event_id).unwrap().unwrap();
    assert_eq!(event.title, "Chapter 1");
    assert_eq!(event.description, "The beginning");
    assert_eq!(event.timestamp, 1000);
}

#[test]
fn test_relationship_round_trip() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();
    registry
        .add_character(&deployer, project_id, "Character 1", "First character")
        .unwrap();
    registry
        .add_character(&deployer, project_id, "Character 2", "Second character")
        .unwrap();

    let relationship_id = registry
        .add_character_relationship(
            &deployer,
            project_id,
            1,
            2,
            "Siblings",
            "Brother and sister",
        )
        .unwrap();
    assert_eq!(relationship_id, 1);

    let relationship = registry
        .get_character_relationship(project_id, relationship_id)
        .unwrap()
        .unwrap();
    assert_eq!(relationship.character1_id, 1);
    assert_eq!(relationship.character2_id, 2);
    assert_eq!(relationship.relationship_type, "Siblings");
    assert_eq!(relationship.description, "Brother and sister");
}

#[test]
fn test_reads_of_absent_entities_return_none() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    // Nothing written at all
    assert!(registry.get_project(1).unwrap().is_none());

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();

    // Ids never written within an existing project
    assert!(registry.get_character(project_id, 1).unwrap().is_none());
    assert!(registry.get_timeline_event(project_id, 1).unwrap().is_none());
    assert!(registry
        .get_character_relationship(project_id, 1)
        .unwrap()
        .is_none());

    // Non-existent project
    assert!(registry.get_character(99, 1).unwrap().is_none());
}

#[test]
fn test_self_relationship_is_allowed() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();
    registry
        .add_character(&deployer, project_id, "Dr. Jekyll", "Leads a double life")
        .unwrap();

    let relationship_id = registry
        .add_character_relationship(&deployer, project_id, 1, 1, "Alter ego", "Mr. Hyde")
        .unwrap();

    let relationship = registry
        .get_character_relationship(project_id, relationship_id)
        .unwrap()
        .unwrap();
    assert_eq!(relationship.character1_id, relationship.character2_id);
}

#[test]
fn test_relationship_requires_existing_characters() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();
    registry
        .add_character(&deployer, project_id, "Character 1", "First character")
        .unwrap();

    // Second endpoint was never created
    let err = registry
        .add_character_relationship(&deployer, project_id, 1, 2, "Siblings", "Missing sibling")
        .unwrap_err();
    assert_eq!(err.code(), 101);

    // Failed call allocated nothing
    assert_eq!(registry.relationship_count(project_id).unwrap(), 0);
    assert!(registry
        .get_character_relationship(project_id, 1)
        .unwrap()
        .is_none());
}

#[test]
fn test_wide_character_descriptions_survive_round_trip() {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");

    let project_id = registry.create_project(&deployer, "My Novel").unwrap();
    let description = "Ein rätselhafter Charakter aus 東京";
    registry
        .add_character(&deployer, project_id, "Kai", description)
        .unwrap();

    let character = registry.get_character(project_id, 1).unwrap().unwrap();
    assert_eq!(character.description, description);
}
