use super::*;
use crate::classes::{ClassDescriptor, ClassRegistry};
use crate::defaults::MappingDefault;
use crate::error::MockError;
use crate::names::{hibernate, jpa};
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn string(name: &str, value: &str) -> AnnotationValue {
    AnnotationValue::new(name, Value::String(value.to_string()))
}

fn compiled_index() -> AnnotationIndex {
    let mut index = AnnotationIndex::new();
    index.add_class(
        ClassInfo::new("com.acme.Order", Some("com.acme.Base".to_string()))
            .with_annotation(AnnotationRecord::compiled(
                jpa::ENTITY,
                Some(AnnotationTarget::class("com.acme.Order")),
                vec![],
            ))
            .with_annotation(AnnotationRecord::compiled(
                jpa::COLUMN,
                Some(AnnotationTarget::method("com.acme.Order", "getTotal")),
                vec![string("name", "AMOUNT")],
            ))
            .with_annotation(AnnotationRecord::compiled(
                jpa::ONE_TO_MANY,
                Some(AnnotationTarget::field("com.acme.Order", "lines")),
                vec![],
            )),
    );
    index
}

fn builder() -> IndexBuilder {
    let registry = ClassRegistry::new();
    registry
        .register_all(vec![
            ClassDescriptor::new("com.acme.Base"),
            ClassDescriptor::new("com.acme.Order").extends("com.acme.Base"),
            ClassDescriptor::new("com.acme.Line"),
        ])
        .unwrap();
    IndexBuilder::new(compiled_index(), Arc::new(registry))
}

#[test]
fn test_create_class_info_copies_compiled_view() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Order").unwrap();
    assert_eq!(builder.indexed_annotations("com.acme.Order").len(), 3);
    assert!(builder.orm_annotations("com.acme.Order").is_empty());
    assert_eq!(builder.super_name("com.acme.Order").as_deref(), Some("com.acme.Base"));

    let err = builder.create_class_info("com.acme.Ghost").unwrap_err();
    assert!(matches!(err, MockError::ClassNotFound(_)));
}

#[test]
fn test_add_annotation_requires_created_class() {
    let mut builder = builder();
    let err = builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::ENTITY,
            Some(AnnotationTarget::class("com.acme.Line")),
            vec![],
        ))
        .unwrap_err();
    assert!(matches!(err, MockError::ClassNotCreated(_)));
}

#[test]
fn test_mocked_annotation_hides_same_property() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Order").unwrap();

    // FIELD-placed mock hides the getter-placed compiled column of the same property
    builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::COLUMN,
            Some(AnnotationTarget::field("com.acme.Order", "total")),
            vec![string("name", "TOTAL")],
        ))
        .unwrap();

    let indexed = builder.indexed_annotations("com.acme.Order");
    assert!(indexed.iter().all(|a| a.name != jpa::COLUMN));
    assert_eq!(builder.orm_annotations("com.acme.Order").len(), 1);
}

#[test]
fn test_attribute_kind_group_is_exclusive() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Order").unwrap();
    builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::MANY_TO_MANY,
            Some(AnnotationTarget::field("com.acme.Order", "lines")),
            vec![],
        ))
        .unwrap();
    assert!(builder
        .indexed_annotations("com.acme.Order")
        .iter()
        .all(|a| a.name != jpa::ONE_TO_MANY));
    // the class-level @Entity is untouched
    assert!(builder
        .indexed_annotations("com.acme.Order")
        .iter()
        .any(|a| a.name == jpa::ENTITY));
}

#[test]
fn test_overridden_names_pairs() {
    assert!(overridden_names(jpa::JOIN_COLUMN).contains(&jpa::JOIN_COLUMNS));
    assert!(overridden_names(hibernate::COLUMNS).contains(&jpa::COLUMN));
    assert!(overridden_names(jpa::MAPPED_SUPERCLASS).contains(&jpa::ENTITY));
    assert_eq!(overridden_names(jpa::ORDER_BY), vec![jpa::ORDER_BY]);
}

#[test]
fn test_global_mock_hides_nothing() {
    let mut compiled = vec![AnnotationRecord::compiled(
        jpa::NAMED_QUERY,
        Some(AnnotationTarget::class("A")),
        vec![],
    )];
    let removed = remove_overridden(
        &mut compiled,
        &AnnotationRecord::mocked(jpa::NAMED_QUERY, None, vec![]),
    );
    assert_eq!(removed, 0);
    assert_eq!(compiled.len(), 1);
}

#[test]
fn test_metadata_complete_clears_compiled_view() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Order").unwrap();
    builder.register_managed("com.acme.Order", ManagedKind::Entity);
    builder.metadata_complete("com.acme.Order").unwrap();

    assert!(builder.is_metadata_complete("com.acme.Order"));
    assert!(builder.indexed_annotations("com.acme.Order").is_empty());
    // still an entity object through its XML registration
    assert!(builder.is_entity_object("com.acme.Order"));
}

#[test]
fn test_is_entity_object() {
    let mut builder = builder();
    // compiled @Entity, never touched by the pass
    assert!(builder.is_entity_object("com.acme.Order"));
    assert!(!builder.is_entity_object("com.acme.Line"));

    builder.create_class_info("com.acme.Line").unwrap();
    builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::EMBEDDABLE,
            Some(AnnotationTarget::class("com.acme.Line")),
            vec![],
        ))
        .unwrap();
    assert!(builder.is_entity_object("com.acme.Line"));
}

#[test]
fn test_finish_applies_schema_defaults() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Line").unwrap();
    builder.register_managed("com.acme.Line", ManagedKind::Entity);
    builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::JOIN_TABLE,
            Some(AnnotationTarget::field("com.acme.Line", "tags")),
            vec![string("name", "LINE_TAGS"), string("schema", "EXPLICIT")],
        ))
        .unwrap();

    let defaults = MappingDefault {
        schema: Some("SALES".to_string()),
        catalog: Some("MAIN".to_string()),
        ..Default::default()
    };
    builder.finish_entity_object("com.acme.Line", &defaults).unwrap();
    let index = builder.build();

    let line = index.class("com.acme.Line").unwrap();
    let join_table = line.annotations_named(jpa::JOIN_TABLE).next().unwrap();
    assert_eq!(join_table.string_value("schema"), Some("EXPLICIT"));
    assert_eq!(join_table.string_value("catalog"), Some("MAIN"));

    // entity without a table gets one carrying the defaults
    let table = line.class_annotation(jpa::TABLE).unwrap();
    assert!(table.mocked);
    assert_eq!(table.string_value("schema"), Some("SALES"));
}

#[test]
fn test_nested_table_defaults() {
    let secondary = AnnotationRecord::mocked(jpa::SECONDARY_TABLE, None, vec![string("name", "EXTRA")]);
    let mut wrapper = AnnotationRecord::mocked(
        jpa::SECONDARY_TABLES,
        Some(AnnotationTarget::class("A")),
        vec![AnnotationValue::new(
            "value",
            Value::Array(vec![Value::Nested(Box::new(secondary))]),
        )],
    );
    let defaults = MappingDefault {
        schema: Some("S".to_string()),
        ..Default::default()
    };
    apply_schema_defaults(&mut wrapper, &defaults);

    let nested = wrapper.nested_records("value");
    assert_eq!(nested[0].string_value("schema"), Some("S"));
    assert!(!wrapper.has_value("schema"));
    assert!(!nested[0].has_value("catalog"));
}

#[test]
fn test_build_merges_views_and_globals() {
    let mut builder = builder();
    builder.create_class_info("com.acme.Order").unwrap();
    builder
        .add_annotation(AnnotationRecord::mocked(
            jpa::BASIC,
            Some(AnnotationTarget::field("com.acme.Order", "total")),
            vec![],
        ))
        .unwrap();
    builder
        .add_annotation(AnnotationRecord::mocked(jpa::NAMED_QUERIES, None, vec![]))
        .unwrap();
    builder.finish_global_configuration_mocking(&MappingDefault::new());
    assert!(builder.is_global_configuration_finished());

    let index = builder.build();
    let order = index.class("com.acme.Order").unwrap();
    // compiled first, mocked after
    let names: Vec<&str> = order.annotations.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec![jpa::ENTITY, jpa::COLUMN, jpa::ONE_TO_MANY, jpa::BASIC]);
    assert_eq!(index.global_annotations().len(), 1);
    assert_eq!(index.annotations_named(jpa::NAMED_QUERIES).len(), 1);
}

#[test]
fn test_index_json_round_trip() {
    let index = compiled_index();
    let json = index.to_json().unwrap();
    let parsed = AnnotationIndex::from_json(&json).unwrap();
    assert_eq!(parsed, index);
    assert_eq!(parsed.super_name("com.acme.Order"), Some("com.acme.Base"));
    assert_eq!(parsed.annotations("com.acme.Missing").len(), 0);
}
