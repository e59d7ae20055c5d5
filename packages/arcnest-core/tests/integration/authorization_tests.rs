//! Authorization tests.
//!
//! Owner-only mutation enforcement: every child mutation from a non-owner
//! fails with the stable unauthorized code and leaves all state untouched.

use arcnest_core::{Principal, Registry};

fn registry_with_project() -> (Registry, Principal, Principal) {
    let registry = Registry::new();
    let deployer = Principal::from("deployer");
    let wallet_1 = Principal::from("wallet_1");
    registry.create_project(&deployer, "My Novel").unwrap();
    (registry, deployer, wallet_1)
}

#[test]
fn test_non_owner_cannot_add_character() {
    let (registry, deployer, wallet_1) = registry_with_project();

    registry
        .add_character(&deployer, 1, "John Doe", "A mysterious character")
        .unwrap();

    let err = registry
        .add_character(&wallet_1, 1, "Jane Doe", "Another character")
        .unwrap_err();
    assert_eq!(err.code(), 102);

    // The rejected write left the owner's character in place and the
    // counter where it was.
    let character = registry.get_character(1, 1).unwrap().unwrap();
    assert_eq!(character.name, "John Doe");
    assert_eq!(character.description, "A mysterious character");
    assert_eq!(registry.character_count(1).unwrap(), 1);
    assert!(registry.get_character(1, 2).unwrap().is_none());
}

#[test]
fn test_non_owner_cannot_add_timeline_event() {
    let (registry, _deployer, wallet_1) = registry_with_project();

    let err = registry
        .add_timeline_event(&wallet_1, 1, "Chapter 1", "The beginning", 1000)
        .unwrap_err();
    assert_eq!(err.code(), 102);
    assert_eq!(registry.event_count(1).unwrap(), 0);
}

#[test]
fn test_non_owner_cannot_add_relationship() {
    let (registry, deployer, wallet_1) = registry_with_project();

    registry
        .add_character(&deployer, 1, "Character 1", "First character")
        .unwrap();
    registry
        .add_character(&deployer, 1, "Character 2", "Second character")
        .unwrap();

    let err = registry
        .add_character_relationship(&wallet_1, 1, 1, 2, "Siblings", "Brother and sister")
        .unwrap_err();
    assert_eq!(err.code(), 102);
    assert_eq!(registry.relationship_count(1).unwrap(), 0);
}

#[test]
fn test_mutation_on_missing_project_is_not_found() {
    let (registry, deployer, _wallet_1) = registry_with_project();

    let err = registry
        .add_character(&deployer, 42, "John Doe", "A mysterious character")
        .unwrap_err();
    assert_eq!(err.code(), 101);

    // No allocation happened in the missing project's scope
    assert_eq!(registry.character_count(42).unwrap(), 0);
}

#[test]
fn test_any_identity_may_create_projects() {
    let registry = Registry::new();

    assert_eq!(registry.create_project(&Principal::from("deployer"), "First").unwrap(), 1);
    assert_eq!(registry.create_project(&Principal::from("wallet_1"), "Second").unwrap(), 2);

    let second = registry.get_project(2).unwrap().unwrap();
    assert_eq!(second.owner, Principal::from("wallet_1"));
}

#[test]
fn test_ownership_is_per_project() {
    let registry = Registry::new();
    let alice = Principal::from("alice");
    let bob = Principal::from("bob");

    registry.create_project(&alice, "Alice's Novel").unwrap();
    registry.create_project(&bob, "Bob's Novel").unwrap();

    // Each owner mutates only their own project
    assert!(registry.add_character(&alice, 1, "Hero", "Protagonist").is_ok());
    assert!(registry.add_character(&bob, 2, "Villain", "Antagonist").is_ok());
    assert_eq!(registry.add_character(&alice, 2, "Imposter", "Not hers").unwrap_err().code(), 102);
    assert_eq!(registry.add_character(&bob, 1, "Imposter", "Not his").unwrap_err().code(), 102);
}
