//! Access type resolution.
//!
//! Answers "field or property?" for a managed type and for each of its
//! attributes. Every function here only reads the builder.

use std::collections::HashSet;

use crate::defaults::MappingDefault;
use crate::error::{MockError, Result};
use crate::index::{AnnotationRecord, AnnotationTarget, IndexBuilder};
use crate::model::AccessType;
use crate::names::{jpa, pseudo};

/// Access declared by an `@Access` (or pseudo default access) record.
pub fn access_of(record: &AnnotationRecord) -> Option<AccessType> {
    record.enum_constant("value").and_then(AccessType::parse_lenient)
}

fn placement_of(target: &AnnotationTarget) -> Option<AccessType> {
    match target {
        AnnotationTarget::Field { .. } => Some(AccessType::Field),
        AnnotationTarget::Method { .. } => Some(AccessType::Property),
        AnnotationTarget::Class { .. } => None,
    }
}

/// Class itself, then each superclass; stops on unknown parents and cycles.
fn hierarchy(builder: &IndexBuilder, class: &str) -> Vec<String> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(class.to_string());
    while let Some(name) = current {
        if !seen.insert(name.clone()) {
            break;
        }
        current = builder.super_name(&name);
        chain.push(name);
    }
    chain
}

/// Class-level `@Access` of `class` or its nearest annotated ancestor.
///
/// Only entities, mapped superclasses and embeddables are consulted. The
/// XML-mocked view is preferred over the compiled one; the first class-level
/// match wins.
pub fn entity_access(builder: &IndexBuilder, class: &str) -> Option<AccessType> {
    for name in hierarchy(builder, class) {
        if !builder.is_entity_object(&name) {
            continue;
        }
        let views = [builder.orm_annotations(&name), builder.indexed_annotations(&name)];
        let found = views
            .iter()
            .flat_map(|view| view.iter())
            .find(|a| a.name == jpa::ACCESS && a.targets_class(&name))
            .and_then(access_of);
        if found.is_some() {
            return found;
        }
    }
    None
}

/// Access implied by where `@Id`/`@EmbeddedId` annotations sit in the hierarchy.
///
/// # Returns
/// `Ok(None)` when no identifier is placed anywhere, or
/// `Err(MockError::InconsistentIdPlacement)` when placements disagree.
pub fn id_placement_access(builder: &IndexBuilder, class: &str) -> Result<Option<AccessType>> {
    let mut found: Option<AccessType> = None;
    for name in hierarchy(builder, class) {
        let annotations = builder
            .orm_annotations(&name)
            .iter()
            .chain(builder.indexed_annotations(&name).iter());
        for annotation in annotations {
            if annotation.name != jpa::ID && annotation.name != jpa::EMBEDDED_ID {
                continue;
            }
            let Some(placement) = annotation.target.as_ref().and_then(placement_of) else {
                continue;
            };
            match found {
                None => found = Some(placement),
                Some(previous) if previous != placement => {
                    return Err(MockError::InconsistentIdPlacement {
                        class: class.to_string(),
                    });
                }
                Some(_) => {}
            }
        }
    }
    Ok(found)
}

/// Compiled `@Access` physically placed on the member of `attribute`.
///
/// A field-placed `@Access(PROPERTY)` or a getter-placed `@Access(FIELD)` is
/// logged and ignored.
pub fn member_access(builder: &IndexBuilder, class: &str, attribute: &str) -> Option<AccessType> {
    for annotation in builder.indexed_annotations(class) {
        if annotation.name != jpa::ACCESS {
            continue;
        }
        let Some(target) = annotation.target.as_ref() else {
            continue;
        };
        if target.is_class() || target.property_name().as_deref() != Some(attribute) {
            continue;
        }
        let (Some(declared), Some(physical)) = (access_of(annotation), placement_of(target)) else {
            continue;
        };
        if declared == physical {
            return Some(declared);
        }
        tracing::warn!(
            "@Access({:?}) on {}.{} is placed on a {} and is ignored",
            declared,
            class,
            attribute,
            if target.is_field() { "field" } else { "method" }
        );
    }
    None
}

/// Persistence-unit wide default access, if one was registered.
pub fn default_access(builder: &IndexBuilder) -> Option<AccessType> {
    builder
        .global_annotations()
        .find(|a| a.name == pseudo::DEFAULT_ACCESS)
        .and_then(access_of)
}

/// Final access of a managed type.
///
/// Declared XML access (type or document), then class-level `@Access` up the
/// hierarchy, then `@Id` placement, then the unit default, then PROPERTY.
pub fn resolve_entity_access(
    builder: &IndexBuilder,
    class: &str,
    defaults: &MappingDefault,
) -> Result<AccessType> {
    if let Some(access) = defaults.access {
        return Ok(access);
    }
    if let Some(access) = entity_access(builder, class) {
        return Ok(access);
    }
    if let Some(access) = id_placement_access(builder, class)? {
        return Ok(access);
    }
    Ok(default_access(builder).unwrap_or(AccessType::Property))
}

/// Access of one attribute of `class`.
///
/// # Arguments
/// * `explicit` - Access declared on the attribute element itself
/// * `defaults` - Effective defaults of the enclosing type
pub fn resolve_attribute_access(
    builder: &IndexBuilder,
    class: &str,
    attribute: &str,
    explicit: Option<AccessType>,
    defaults: &MappingDefault,
) -> Result<AccessType> {
    if let Some(access) = explicit {
        return Ok(access);
    }
    if let Some(access) = defaults.access {
        return Ok(access);
    }
    if let Some(access) = member_access(builder, class, attribute) {
        return Ok(access);
    }
    if let Some(access) = entity_access(builder, class) {
        return Ok(access);
    }
    if let Some(access) = id_placement_access(builder, class)? {
        return Ok(access);
    }
    Ok(default_access(builder).unwrap_or(AccessType::Property))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{ClassDescriptor, ClassRegistry};
    use crate::index::{AnnotationIndex, AnnotationValue, ClassInfo, ManagedKind};
    use crate::mock::values::enum_constant;
    use std::sync::Arc;

    fn access_record(target: AnnotationTarget, constant: &str) -> AnnotationRecord {
        AnnotationRecord::compiled(
            jpa::ACCESS,
            Some(target),
            vec![AnnotationValue::new(
                "value",
                enum_constant(jpa::ACCESS_TYPE, constant),
            )],
        )
    }

    fn id_record(target: AnnotationTarget) -> AnnotationRecord {
        AnnotationRecord::compiled(jpa::ID, Some(target), vec![])
    }

    fn builder(index: AnnotationIndex) -> IndexBuilder {
        let registry = ClassRegistry::new();
        registry
            .register_all(vec![
                ClassDescriptor::new("Base"),
                ClassDescriptor::new("Child").extends("Base"),
                ClassDescriptor::new("Other"),
            ])
            .unwrap();
        IndexBuilder::new(index, Arc::new(registry))
    }

    fn entity(name: &str, super_name: Option<&str>) -> ClassInfo {
        ClassInfo::new(name, super_name.map(str::to_string)).with_annotation(
            AnnotationRecord::compiled(jpa::ENTITY, Some(AnnotationTarget::class(name)), vec![]),
        )
    }

    #[test]
    fn test_entity_access_walks_to_superclass() {
        let mut index = AnnotationIndex::new();
        index.add_class(
            ClassInfo::new("Base", None)
                .with_annotation(AnnotationRecord::compiled(
                    jpa::MAPPED_SUPERCLASS,
                    Some(AnnotationTarget::class("Base")),
                    vec![],
                ))
                .with_annotation(access_record(AnnotationTarget::class("Base"), "FIELD")),
        );
        index.add_class(entity("Child", Some("Base")));
        let builder = builder(index);

        assert_eq!(entity_access(&builder, "Child"), Some(AccessType::Field));
        assert_eq!(entity_access(&builder, "Other"), None);
    }

    #[test]
    fn test_entity_access_ignores_non_entity_objects() {
        let mut index = AnnotationIndex::new();
        index.add_class(
            ClassInfo::new("Base", None)
                .with_annotation(access_record(AnnotationTarget::class("Base"), "FIELD")),
        );
        index.add_class(entity("Child", Some("Base")));
        let mut builder = builder(index);
        assert_eq!(entity_access(&builder, "Child"), None);

        // declaring Base in XML makes it count
        builder.register_managed("Base", ManagedKind::MappedSuperclass);
        assert_eq!(entity_access(&builder, "Child"), Some(AccessType::Field));
    }

    #[test]
    fn test_member_level_access_is_not_class_level() {
        let mut index = AnnotationIndex::new();
        index.add_class(
            entity("Child", None)
                .with_annotation(access_record(AnnotationTarget::field("Child", "name"), "FIELD")),
        );
        let builder = builder(index);
        assert_eq!(entity_access(&builder, "Child"), None);
        assert_eq!(member_access(&builder, "Child", "name"), Some(AccessType::Field));
    }

    #[test]
    fn test_misplaced_member_access_is_ignored() {
        let mut index = AnnotationIndex::new();
        index.add_class(
            entity("Child", None)
                .with_annotation(access_record(AnnotationTarget::field("Child", "name"), "PROPERTY"))
                .with_annotation(access_record(AnnotationTarget::method("Child", "getCode"), "PROPERTY")),
        );
        let builder = builder(index);
        assert_eq!(member_access(&builder, "Child", "name"), None);
        assert_eq!(member_access(&builder, "Child", "code"), Some(AccessType::Property));
    }

    #[test]
    fn test_id_placement() {
        let mut index = AnnotationIndex::new();
        index.add_class(entity("Base", None).with_annotation(id_record(AnnotationTarget::method("Base", "getId"))));
        index.add_class(entity("Child", Some("Base")));
        let builder = builder(index);
        assert_eq!(
            id_placement_access(&builder, "Child").unwrap(),
            Some(AccessType::Property)
        );
        assert_eq!(id_placement_access(&builder, "Other").unwrap(), None);
    }

    #[test]
    fn test_inconsistent_id_placement() {
        let mut index = AnnotationIndex::new();
        index.add_class(entity("Base", None).with_annotation(id_record(AnnotationTarget::field("Base", "id"))));
        index.add_class(
            entity("Child", Some("Base"))
                .with_annotation(id_record(AnnotationTarget::method("Child", "getCode"))),
        );
        let builder = builder(index);
        let err = id_placement_access(&builder, "Child").unwrap_err();
        assert!(matches!(err, MockError::InconsistentIdPlacement { .. }));
        // the parent alone is consistent
        assert_eq!(id_placement_access(&builder, "Base").unwrap(), Some(AccessType::Field));
    }

    #[test]
    fn test_attribute_chain_order() {
        let mut index = AnnotationIndex::new();
        index.add_class(
            entity("Child", None)
                .with_annotation(id_record(AnnotationTarget::field("Child", "id")))
                .with_annotation(access_record(AnnotationTarget::method("Child", "getName"), "PROPERTY")),
        );
        let builder = builder(index);
        let none = MappingDefault::new();
        let doc = MappingDefault {
            access: Some(AccessType::Property),
            ..Default::default()
        };

        // explicit beats everything
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "id", Some(AccessType::Field), &doc).unwrap(),
            AccessType::Field
        );
        // document default beats annotations
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "id", None, &doc).unwrap(),
            AccessType::Property
        );
        // member @Access beats @Id placement
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "name", None, &none).unwrap(),
            AccessType::Property
        );
        // @Id placement
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "other", None, &none).unwrap(),
            AccessType::Field
        );
    }

    #[test]
    fn test_unit_default_then_property() {
        let mut index = AnnotationIndex::new();
        index.add_class(entity("Child", None));
        let mut builder = builder(index);
        let none = MappingDefault::new();
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "name", None, &none).unwrap(),
            AccessType::Property
        );

        builder.add_global_annotation(AnnotationRecord::mocked(
            pseudo::DEFAULT_ACCESS,
            None,
            vec![AnnotationValue::new("value", enum_constant(jpa::ACCESS_TYPE, "FIELD"))],
        ));
        assert_eq!(
            resolve_attribute_access(&builder, "Child", "name", None, &none).unwrap(),
            AccessType::Field
        );
        assert_eq!(
            resolve_entity_access(&builder, "Child", &none).unwrap(),
            AccessType::Field
        );
    }

    #[test]
    fn test_resolution_is_read_only_and_repeatable() {
        let mut index = AnnotationIndex::new();
        index.add_class(entity("Child", None).with_annotation(id_record(AnnotationTarget::field("Child", "id"))));
        let builder = builder(index.clone());
        let none = MappingDefault::new();
        let first = resolve_entity_access(&builder, "Child", &none).unwrap();
        for _ in 0..5 {
            assert_eq!(resolve_entity_access(&builder, "Child", &none).unwrap(), first);
        }
        assert_eq!(builder.indexed_annotations("Child"), index.annotations("Child"));
        // @Entity carries no access value
        assert_eq!(access_of(&index.annotations("Child")[0]), None);
    }
}
