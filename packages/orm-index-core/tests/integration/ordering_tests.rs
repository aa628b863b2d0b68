//! Access resolution across documents.

use std::sync::Arc;

use ntest::timeout;
use pretty_assertions::assert_eq;

use orm_index_core::model::{AccessType, Attributes, Entity, EntityMappings, Id, MappedSuperclass};
use orm_index_core::names::jpa;
use orm_index_core::{AnnotationIndex, AnnotationTarget, ClassDescriptor, ClassLoaderService, Unifier};

use super::helpers::{add_compiled, registry};

fn compiled_index() -> AnnotationIndex {
    let mut index = AnnotationIndex::new();
    add_compiled(
        &mut index,
        "com.a.Base",
        None,
        vec![(jpa::ID, AnnotationTarget::field("com.a.Base", "id"))],
    );
    add_compiled(
        &mut index,
        "com.b.Thing",
        None,
        vec![(jpa::ID, AnnotationTarget::method("com.b.Thing", "getKey"))],
    );
    index
}

fn loader() -> Arc<dyn ClassLoaderService> {
    registry(vec![
        ClassDescriptor::new("com.a.Base").with_field("id").with_field("name"),
        ClassDescriptor::new("com.b.Thing").with_getter("key").with_getter("label"),
    ])
}

fn document_a() -> EntityMappings {
    EntityMappings {
        package: Some("com.a".to_string()),
        mapped_superclasses: vec![MappedSuperclass {
            class: "Base".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn document_b() -> EntityMappings {
    EntityMappings {
        package: Some("com.b".to_string()),
        entities: vec![Entity {
            class: "Thing".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[timeout(5000)]
#[test]
fn test_unrelated_hierarchies_are_order_independent() {
    let unifier = Unifier::default();
    let forward = unifier
        .unify_detailed(compiled_index(), vec![document_a(), document_b()], loader())
        .unwrap();
    let backward = unifier
        .unify_detailed(compiled_index(), vec![document_b(), document_a()], loader())
        .unwrap();

    assert_eq!(forward.accesses.get("com.a.Base"), Some(&AccessType::Field));
    assert_eq!(forward.accesses.get("com.b.Thing"), Some(&AccessType::Property));
    assert_eq!(forward.accesses, backward.accesses);
}

#[timeout(5000)]
#[test]
fn test_superclass_access_is_inherited_across_documents() {
    // @Access of the superclass lands during pre-process, before the
    // subclass from the second document is processed
    let loader = registry(vec![
        ClassDescriptor::new("com.a.Root").with_field("id"),
        ClassDescriptor::new("com.a.Leaf").extends("com.a.Root").with_field("size"),
    ]);
    let root = EntityMappings {
        package: Some("com.a".to_string()),
        mapped_superclasses: vec![MappedSuperclass {
            class: "Root".to_string(),
            access: Some(AccessType::Field),
            attributes: Some(Attributes {
                ids: vec![Id {
                    name: "id".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    };
    let leaf = EntityMappings {
        package: Some("com.a".to_string()),
        entities: vec![Entity {
            class: "Leaf".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };

    let unified = Unifier::default()
        .unify_detailed(AnnotationIndex::new(), vec![root, leaf], loader)
        .unwrap();
    assert_eq!(unified.accesses.get("com.a.Leaf"), Some(&AccessType::Field));
    let root_id = unified.index.annotations_named(jpa::ID);
    assert_eq!(root_id.len(), 1);
    assert_eq!(root_id[0].target, Some(AnnotationTarget::field("com.a.Root", "id")));
}
