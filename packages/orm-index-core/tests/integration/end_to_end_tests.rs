//! End-to-end unification scenarios.

use ntest::timeout;
use pretty_assertions::assert_eq;

use orm_index_core::model::{
    AccessType, Attributes, Basic, Column, ColumnOrFormula, Entity, EntityMappings, MappedSuperclass,
    OneToMany, PersistenceUnitDefaults, PersistenceUnitMetadata,
};
use orm_index_core::names::{collection_types, hibernate, jpa, pseudo};
use orm_index_core::{
    unify, AnnotationIndex, AnnotationTarget, ClassDescriptor, MockError, Unifier, UnifierConfig,
};

use super::helpers::{add_compiled, names_on, registry};

fn foo_document() -> EntityMappings {
    EntityMappings {
        package: Some("com.example".to_string()),
        entities: vec![Entity {
            class: "Foo".to_string(),
            access: Some(AccessType::Field),
            attributes: Some(Attributes {
                basics: vec![Basic {
                    name: "bar".to_string(),
                    columns: vec![ColumnOrFormula::Column(Column::named("BAR_COL"))],
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

fn foo_class() -> ClassDescriptor {
    ClassDescriptor::new("com.example.Foo")
        .with_field("bar")
        .with_getter("bar")
}

#[timeout(5000)]
#[test]
fn test_field_access_entity_with_basic_column() {
    let loader = registry(vec![foo_class()]);
    let index = unify(AnnotationIndex::new(), vec![foo_document()], loader).unwrap();

    let class = AnnotationTarget::class("com.example.Foo");
    let bar = AnnotationTarget::field("com.example.Foo", "bar");
    assert_eq!(
        names_on(&index, "com.example.Foo", &class),
        vec![jpa::ACCESS, jpa::ENTITY]
    );
    assert_eq!(names_on(&index, "com.example.Foo", &bar), vec![jpa::BASIC, jpa::COLUMN]);

    let foo = index.class("com.example.Foo").unwrap();
    assert_eq!(foo.class_annotation(jpa::ACCESS).unwrap().enum_constant("value"), Some("FIELD"));
    let column = foo.annotations_named(jpa::COLUMN).next().unwrap();
    assert_eq!(column.string_value("name"), Some("BAR_COL"));
    assert!(column.mocked);
    // no member-level @Access for an entity-level declaration
    assert_eq!(foo.annotations_named(jpa::ACCESS).count(), 1);
}

#[timeout(5000)]
#[test]
fn test_inconsistent_id_placement_aborts() {
    let mut index = AnnotationIndex::new();
    add_compiled(
        &mut index,
        "com.example.Base",
        None,
        vec![(jpa::ID, AnnotationTarget::field("com.example.Base", "id"))],
    );
    add_compiled(
        &mut index,
        "com.example.Child",
        Some("com.example.Base"),
        vec![(jpa::ID, AnnotationTarget::method("com.example.Child", "getCode"))],
    );
    let loader = registry(vec![
        ClassDescriptor::new("com.example.Base").with_field("id"),
        ClassDescriptor::new("com.example.Child")
            .extends("com.example.Base")
            .with_getter("code"),
    ]);
    let document = EntityMappings {
        package: Some("com.example".to_string()),
        mapped_superclasses: vec![MappedSuperclass {
            class: "Base".to_string(),
            ..Default::default()
        }],
        entities: vec![Entity {
            class: "Child".to_string(),
            ..Default::default()
        }],
        ..Default::default()
    };

    let err = unify(index, vec![document], loader).unwrap_err();
    assert!(matches!(err, MockError::InconsistentIdPlacement { class } if class == "com.example.Child"));
}

#[timeout(5000)]
#[test]
fn test_collection_type_keyword_is_expanded() {
    let loader = registry(vec![
        ClassDescriptor::new("com.example.Order").with_field("lines"),
        ClassDescriptor::new("com.example.Line"),
    ]);
    let document = EntityMappings {
        package: Some("com.example".to_string()),
        access: Some(AccessType::Field),
        entities: vec![Entity {
            class: "Order".to_string(),
            attributes: Some(Attributes {
                one_to_manys: vec![OneToMany {
                    name: "lines".to_string(),
                    target_entity: Some("Line".to_string()),
                    collection_type: Some("map".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }),
            ..Default::default()
        }],
        ..Default::default()
    };

    let index = unify(AnnotationIndex::new(), vec![document], loader).unwrap();
    let order = index.class("com.example.Order").unwrap();
    let collection_type = order.annotations_named(hibernate::COLLECTION_TYPE).next().unwrap();
    assert_eq!(collection_type.string_value("type"), Some(collection_types::MAP));
    // entity-level access was only a document default, so no class @Access
    assert!(order.class_annotation(jpa::ACCESS).is_none());
}

fn metadata_document(schema: &str, access: AccessType) -> EntityMappings {
    EntityMappings {
        persistence_unit_metadata: Some(PersistenceUnitMetadata {
            xml_mapping_metadata_complete: false,
            persistence_unit_defaults: Some(PersistenceUnitDefaults {
                schema: Some(schema.to_string()),
                access: Some(access),
                ..Default::default()
            }),
        }),
        ..Default::default()
    }
}

#[timeout(5000)]
#[test]
fn test_first_persistence_unit_metadata_wins() {
    let loader = registry(vec![foo_class()]);
    let mut first = metadata_document("FIRST", AccessType::Field);
    first.package = Some("com.example".to_string());
    first.entities = foo_document().entities;
    first.entities[0].access = None;
    let second = metadata_document("SECOND", AccessType::Property);

    let index = unify(AnnotationIndex::new(), vec![first, second], loader).unwrap();

    let defaults: Vec<_> = index
        .global_annotations()
        .iter()
        .filter(|a| a.name == pseudo::DEFAULT_ACCESS)
        .collect();
    assert_eq!(defaults.len(), 1);
    assert_eq!(defaults[0].enum_constant("value"), Some("FIELD"));

    let foo = index.class("com.example.Foo").unwrap();
    let table = foo.class_annotation(jpa::TABLE).unwrap();
    assert_eq!(table.string_value("schema"), Some("FIRST"));
    // the unit default access decides the member
    let bar = AnnotationTarget::field("com.example.Foo", "bar");
    assert_eq!(names_on(&index, "com.example.Foo", &bar), vec![jpa::BASIC, jpa::COLUMN]);
}

#[timeout(5000)]
#[test]
fn test_metadata_complete_drops_compiled_annotations() {
    let mut index = AnnotationIndex::new();
    add_compiled(
        &mut index,
        "com.example.Foo",
        None,
        vec![
            (jpa::ENTITY, AnnotationTarget::class("com.example.Foo")),
            (jpa::LOB, AnnotationTarget::method("com.example.Foo", "getBar")),
        ],
    );
    let mut document = foo_document();
    document.entities[0].metadata_complete = Some(true);

    let merged = unify(index, vec![document], registry(vec![foo_class()])).unwrap();
    let foo = merged.class("com.example.Foo").unwrap();
    assert!(foo.annotations.iter().all(|a| a.mocked));
    assert!(foo.annotations_named(jpa::LOB).next().is_none());
}

#[timeout(5000)]
#[test]
fn test_compiled_annotations_survive_unless_overridden() {
    let mut index = AnnotationIndex::new();
    add_compiled(
        &mut index,
        "com.example.Foo",
        None,
        vec![
            (jpa::MAPPED_SUPERCLASS, AnnotationTarget::class("com.example.Foo")),
            (jpa::LOB, AnnotationTarget::method("com.example.Foo", "getBar")),
            (jpa::COLUMN, AnnotationTarget::method("com.example.Foo", "getBar")),
        ],
    );

    let merged = unify(index, vec![foo_document()], registry(vec![foo_class()])).unwrap();
    let foo = merged.class("com.example.Foo").unwrap();
    let names: Vec<(&str, bool)> = foo.annotations.iter().map(|a| (a.name.as_str(), a.mocked)).collect();
    assert_eq!(
        names,
        vec![
            (jpa::LOB, false),
            (jpa::ACCESS, true),
            (jpa::ENTITY, true),
            (jpa::BASIC, true),
            (jpa::COLUMN, true),
        ]
    );
}

#[test]
fn test_disabled_unifier_returns_input() {
    let mut index = AnnotationIndex::new();
    add_compiled(
        &mut index,
        "com.example.Foo",
        None,
        vec![(jpa::ENTITY, AnnotationTarget::class("com.example.Foo"))],
    );
    let config = UnifierConfig {
        xml_mapping_enabled: false,
        ..Default::default()
    };
    let unified = Unifier::new(config)
        .unify(index.clone(), vec![foo_document()], registry(vec![foo_class()]))
        .unwrap();
    assert_eq!(unified, index);

    let untouched = unify(index.clone(), Vec::new(), registry(Vec::new())).unwrap();
    assert_eq!(untouched, index);
}

#[test]
fn test_unknown_entity_class_is_fatal() {
    let err = unify(AnnotationIndex::new(), vec![foo_document()], registry(Vec::new())).unwrap_err();
    assert!(matches!(err, MockError::ClassNotFound(name) if name == "com.example.Foo"));
}
