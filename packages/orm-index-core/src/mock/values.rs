//! Builders for annotation value arrays.
//!
//! Every builder appends zero or one value: nothing for an absent input
//! (or an empty string), exactly one otherwise. An absent attribute means
//! "use the annotation's own default", which is not the same as an attribute
//! carrying a default-looking value.

use crate::classes::ClassLoaderService;
use crate::error::{MockError, Result};
use crate::index::{AnnotationRecord, AnnotationValue, Value};
use crate::model::{CascadeType, MappingEnum};
use crate::names::{collection_types, hibernate, jpa};

/// A nested (targetless) annotation.
pub fn nested(name: &str, values: Vec<AnnotationValue>) -> AnnotationRecord {
    AnnotationRecord::mocked(name, None, values)
}

pub fn string_value(name: &str, value: Option<&str>, values: &mut Vec<AnnotationValue>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        values.push(AnnotationValue::new(name, Value::String(value.to_string())));
    }
}

pub fn bool_value(name: &str, value: Option<bool>, values: &mut Vec<AnnotationValue>) {
    if let Some(value) = value {
        values.push(AnnotationValue::new(name, Value::Boolean(value)));
    }
}

pub fn integer_value(name: &str, value: Option<i32>, values: &mut Vec<AnnotationValue>) {
    if let Some(value) = value {
        values.push(AnnotationValue::new(name, Value::Integer(value)));
    }
}

pub fn long_value(name: &str, value: Option<i64>, values: &mut Vec<AnnotationValue>) {
    if let Some(value) = value {
        values.push(AnnotationValue::new(name, Value::Long(value)));
    }
}

/// Value form of one enum constant.
pub fn enum_constant(type_name: &str, constant: &str) -> Value {
    Value::Enum {
        type_name: type_name.to_string(),
        constant: constant.to_string(),
    }
}

pub fn enum_value<E: MappingEnum>(name: &str, value: Option<E>, values: &mut Vec<AnnotationValue>) {
    if let Some(value) = value {
        values.push(AnnotationValue::new(
            name,
            enum_constant(E::TYPE_NAME, value.constant()),
        ));
    }
}

pub fn enum_array_value<E: MappingEnum>(name: &str, items: &[E], values: &mut Vec<AnnotationValue>) {
    if items.is_empty() {
        return;
    }
    let array = items
        .iter()
        .map(|item| enum_constant(E::TYPE_NAME, item.constant()))
        .collect();
    values.push(AnnotationValue::new(name, Value::Array(array)));
}

pub fn string_array_value(name: &str, items: &[String], values: &mut Vec<AnnotationValue>) {
    if items.is_empty() {
        return;
    }
    let array = items.iter().map(|s| Value::String(s.clone())).collect();
    values.push(AnnotationValue::new(name, Value::Array(array)));
}

pub fn nested_value(name: &str, value: Option<AnnotationRecord>, values: &mut Vec<AnnotationValue>) {
    if let Some(record) = value {
        values.push(AnnotationValue::new(name, Value::Nested(Box::new(record))));
    }
}

pub fn nested_array_value(name: &str, items: Vec<AnnotationRecord>, values: &mut Vec<AnnotationValue>) {
    if items.is_empty() {
        return;
    }
    let array = items
        .into_iter()
        .map(|record| Value::Nested(Box::new(record)))
        .collect();
    values.push(AnnotationValue::new(name, Value::Array(array)));
}

/// Qualifies a bare class name (no `.`) with the default package.
pub fn qualify_class_name(name: &str, package: Option<&str>) -> String {
    match package.filter(|p| !p.is_empty()) {
        Some(package) if !name.contains('.') => format!("{}.{}", package, name),
        _ => name.to_string(),
    }
}

fn resolve_class(
    name: &str,
    package: Option<&str>,
    loader: &dyn ClassLoaderService,
) -> Result<String> {
    let qualified = qualify_class_name(name, package);
    if loader.load_class(&qualified).is_none() {
        return Err(MockError::ClassNotFound(qualified));
    }
    Ok(qualified)
}

/// Class reference value; the class must be loadable.
pub fn class_value(
    name: &str,
    class: Option<&str>,
    package: Option<&str>,
    loader: &dyn ClassLoaderService,
    values: &mut Vec<AnnotationValue>,
) -> Result<()> {
    if let Some(class) = class.filter(|c| !c.is_empty()) {
        let qualified = resolve_class(class, package, loader)?;
        values.push(AnnotationValue::new(name, Value::Class(qualified)));
    }
    Ok(())
}

pub fn class_array_value(
    name: &str,
    classes: &[String],
    package: Option<&str>,
    loader: &dyn ClassLoaderService,
    values: &mut Vec<AnnotationValue>,
) -> Result<()> {
    if classes.is_empty() {
        return Ok(());
    }
    let array = classes
        .iter()
        .map(|class| resolve_class(class, package, loader).map(Value::Class))
        .collect::<Result<Vec<_>>>()?;
    values.push(AnnotationValue::new(name, Value::Array(array)));
    Ok(())
}

/// JPA cascade constants set in `cascade`, in `CascadeType` declaration order.
///
/// A unit-wide cascade-persist default contributes `PERSIST` first.
pub fn cascade_constants(cascade: Option<&CascadeType>, default_persist: bool) -> Vec<&'static str> {
    let mut constants = Vec::new();
    if default_persist {
        constants.push("PERSIST");
    }
    if let Some(cascade) = cascade {
        let flags = [
            (cascade.cascade_all, "ALL"),
            (cascade.cascade_persist && !default_persist, "PERSIST"),
            (cascade.cascade_merge, "MERGE"),
            (cascade.cascade_remove, "REMOVE"),
            (cascade.cascade_refresh, "REFRESH"),
            (cascade.cascade_detach, "DETACH"),
        ];
        constants.extend(flags.iter().filter(|(set, _)| *set).map(|(_, c)| *c));
    }
    constants
}

/// `cascade` attribute of a JPA association; absent when nothing cascades.
pub fn cascade_value(
    name: &str,
    cascade: Option<&CascadeType>,
    default_persist: bool,
    values: &mut Vec<AnnotationValue>,
) {
    let constants = cascade_constants(cascade, default_persist);
    if constants.is_empty() {
        return;
    }
    let array = constants
        .into_iter()
        .map(|c| enum_constant(jpa::CASCADE_TYPE, c))
        .collect();
    values.push(AnnotationValue::new(name, Value::Array(array)));
}

/// Values of a Hibernate `@Cascade`, when any Hibernate-only flag is set.
pub fn extended_cascade_value(cascade: Option<&CascadeType>) -> Option<Vec<AnnotationValue>> {
    let cascade = cascade.filter(|c| c.has_extended())?;
    let flags = [
        (cascade.cascade_all, "ALL"),
        (cascade.cascade_persist, "PERSIST"),
        (cascade.cascade_merge, "MERGE"),
        (cascade.cascade_remove, "REMOVE"),
        (cascade.cascade_refresh, "REFRESH"),
        (cascade.cascade_detach, "DETACH"),
        (cascade.cascade_save_update, "SAVE_UPDATE"),
        (cascade.cascade_replicate, "REPLICATE"),
        (cascade.cascade_lock, "LOCK"),
        (cascade.cascade_delete, "DELETE"),
    ];
    let array = flags
        .iter()
        .filter(|(set, _)| *set)
        .map(|(_, c)| enum_constant(hibernate::CASCADE_TYPE, c))
        .collect();
    Some(vec![AnnotationValue::new("value", Value::Array(array))])
}

/// Expands an abbreviated `<collection-type>` keyword.
///
/// Unknown values are taken as already fully qualified.
pub fn collection_type_name(keyword: &str) -> String {
    match keyword.to_ascii_lowercase().as_str() {
        "set" => collection_types::SET.to_string(),
        "bag" => collection_types::BAG.to_string(),
        "list" => collection_types::LIST.to_string(),
        "map" => collection_types::MAP.to_string(),
        "array" => collection_types::ARRAY.to_string(),
        _ => keyword.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classes::{ClassDescriptor, ClassRegistry};
    use crate::model::{AccessType, FetchType};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn constants_of(values: &[AnnotationValue]) -> Vec<String> {
        match values.first().map(|v| &v.value) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_enum_constant().map(str::to_string))
                .collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn test_absent_values_emit_nothing() {
        let mut values = Vec::new();
        string_value("name", None, &mut values);
        string_value("name", Some(""), &mut values);
        bool_value("unique", None, &mut values);
        integer_value("length", None, &mut values);
        long_value("timeout", None, &mut values);
        enum_value::<FetchType>("fetch", None, &mut values);
        enum_array_value::<AccessType>("value", &[], &mut values);
        string_array_value("columnNames", &[], &mut values);
        nested_value("column", None, &mut values);
        nested_array_value("joinColumns", Vec::new(), &mut values);
        assert!(values.is_empty());
    }

    #[test]
    fn test_present_values_in_order() {
        let mut values = Vec::new();
        string_value("name", Some("BAR"), &mut values);
        bool_value("nullable", Some(false), &mut values);
        integer_value("length", Some(40), &mut values);
        enum_value("fetch", Some(FetchType::Lazy), &mut values);

        let names: Vec<&str> = values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, vec!["name", "nullable", "length", "fetch"]);
        assert_eq!(values[1].value, Value::Boolean(false));
        assert_eq!(
            values[3].value,
            enum_constant("javax.persistence.FetchType", "LAZY")
        );
    }

    #[test]
    fn test_class_value_qualifies_and_resolves() {
        let registry = ClassRegistry::new();
        registry.register(ClassDescriptor::new("com.acme.Line")).unwrap();

        let mut values = Vec::new();
        class_value("targetEntity", Some("Line"), Some("com.acme"), &registry, &mut values).unwrap();
        assert_eq!(values[0].value, Value::Class("com.acme.Line".to_string()));

        let err = class_value("targetEntity", Some("Ghost"), Some("com.acme"), &registry, &mut values)
            .unwrap_err();
        assert!(matches!(err, MockError::ClassNotFound(name) if name == "com.acme.Ghost"));

        let err = class_array_value(
            "value",
            &["Line".to_string(), "Ghost".to_string()],
            Some("com.acme"),
            &registry,
            &mut values,
        )
        .unwrap_err();
        assert!(matches!(err, MockError::ClassNotFound(_)));
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_qualify_class_name() {
        assert_eq!(qualify_class_name("Line", Some("com.acme")), "com.acme.Line");
        assert_eq!(qualify_class_name("org.x.Line", Some("com.acme")), "org.x.Line");
        assert_eq!(qualify_class_name("Line", None), "Line");
        assert_eq!(qualify_class_name("Line", Some("")), "Line");
    }

    #[test]
    fn test_cascade_nothing_set() {
        let mut values = Vec::new();
        cascade_value("cascade", None, false, &mut values);
        cascade_value("cascade", Some(&CascadeType::default()), false, &mut values);
        assert!(values.is_empty());

        cascade_value("cascade", None, true, &mut values);
        assert_eq!(constants_of(&values), vec!["PERSIST"]);
    }

    #[test]
    fn test_cascade_declaration_order() {
        let all = CascadeType {
            cascade_all: true,
            cascade_persist: true,
            cascade_merge: true,
            cascade_remove: true,
            cascade_refresh: true,
            cascade_detach: true,
            ..Default::default()
        };
        let mut values = Vec::new();
        cascade_value("cascade", Some(&all), false, &mut values);
        assert_eq!(
            constants_of(&values),
            vec!["ALL", "PERSIST", "MERGE", "REMOVE", "REFRESH", "DETACH"]
        );

        let mut values = Vec::new();
        cascade_value("cascade", Some(&all), true, &mut values);
        assert_eq!(
            constants_of(&values),
            vec!["PERSIST", "ALL", "MERGE", "REMOVE", "REFRESH", "DETACH"]
        );
    }

    #[test]
    fn test_extended_cascade() {
        let plain = CascadeType {
            cascade_merge: true,
            ..Default::default()
        };
        assert!(extended_cascade_value(Some(&plain)).is_none());

        let extended = CascadeType {
            cascade_merge: true,
            cascade_save_update: true,
            cascade_delete: true,
            ..Default::default()
        };
        let values = extended_cascade_value(Some(&extended)).unwrap();
        assert_eq!(constants_of(&values), vec!["MERGE", "SAVE_UPDATE", "DELETE"]);
        match &values[0].value {
            Value::Array(items) => assert!(items.iter().all(|v| matches!(
                v,
                Value::Enum { type_name, .. } if type_name == hibernate::CASCADE_TYPE
            ))),
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn test_collection_type_keywords() {
        for (keyword, expected) in [
            ("set", collection_types::SET),
            ("BAG", collection_types::BAG),
            ("List", collection_types::LIST),
            ("mAp", collection_types::MAP),
            ("array", collection_types::ARRAY),
        ] {
            assert_eq!(collection_type_name(keyword), expected);
        }
        assert_eq!(collection_type_name("com.acme.MyBag"), "com.acme.MyBag");
        assert_eq!(collection_type_name("sets"), "sets");
    }

    proptest! {
        #[test]
        fn prop_cascade_contains_exactly_set_flags(bits in 0u8..64, default_persist in any::<bool>()) {
            let cascade = CascadeType {
                cascade_all: bits & 1 != 0,
                cascade_persist: bits & 2 != 0,
                cascade_merge: bits & 4 != 0,
                cascade_remove: bits & 8 != 0,
                cascade_refresh: bits & 16 != 0,
                cascade_detach: bits & 32 != 0,
                ..Default::default()
            };
            let mut values = Vec::new();
            cascade_value("cascade", Some(&cascade), default_persist, &mut values);

            let mut expected = Vec::new();
            if default_persist {
                expected.push("PERSIST");
            }
            for (set, constant) in [
                (cascade.cascade_all, "ALL"),
                (cascade.cascade_persist && !default_persist, "PERSIST"),
                (cascade.cascade_merge, "MERGE"),
                (cascade.cascade_remove, "REMOVE"),
                (cascade.cascade_refresh, "REFRESH"),
                (cascade.cascade_detach, "DETACH"),
            ] {
                if set {
                    expected.push(constant);
                }
            }

            if expected.is_empty() {
                prop_assert!(values.is_empty());
            } else {
                let wanted: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
                prop_assert_eq!(constants_of(&values), wanted);
                // stable: same input, same order
                let mut again = Vec::new();
                cascade_value("cascade", Some(&cascade), default_persist, &mut again);
                prop_assert_eq!(&again, &values);
            }
        }
    }
}
