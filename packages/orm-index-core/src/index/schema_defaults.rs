//! Deferred schema/catalog defaulting of table-like annotations.

use super::annotation::{AnnotationRecord, AnnotationTarget, AnnotationValue, Value};
use crate::defaults::MappingDefault;
use crate::names::jpa;

const SCHEMA_AWARE: &[&str] = &[
    jpa::TABLE,
    jpa::JOIN_TABLE,
    jpa::COLLECTION_TABLE,
    jpa::SECONDARY_TABLE,
    jpa::TABLE_GENERATOR,
    jpa::SEQUENCE_GENERATOR,
];

/// Fills missing `schema`/`catalog` values on `record` and every nested
/// table-like annotation it carries.
pub fn apply_schema_defaults(record: &mut AnnotationRecord, defaults: &MappingDefault) {
    if defaults.schema.is_none() && defaults.catalog.is_none() {
        return;
    }
    if SCHEMA_AWARE.contains(&record.name.as_str()) {
        fill(record, "schema", defaults.schema.as_deref());
        fill(record, "catalog", defaults.catalog.as_deref());
    }
    for value in record.values.iter_mut() {
        apply_to_value(&mut value.value, defaults);
    }
}

fn apply_to_value(value: &mut Value, defaults: &MappingDefault) {
    match value {
        Value::Nested(nested) => apply_schema_defaults(nested, defaults),
        Value::Array(items) => {
            for item in items.iter_mut() {
                apply_to_value(item, defaults);
            }
        }
        _ => {}
    }
}

fn fill(record: &mut AnnotationRecord, name: &str, default: Option<&str>) {
    let Some(default) = default.filter(|d| !d.is_empty()) else {
        return;
    };
    if !record.has_value(name) {
        record
            .values
            .push(AnnotationValue::new(name, Value::String(default.to_string())));
    }
}

/// `@Table` carrying only the default schema/catalog, for entities that
/// declare no table at all.
pub fn default_table(class: &str, defaults: &MappingDefault) -> Option<AnnotationRecord> {
    if defaults.schema.is_none() && defaults.catalog.is_none() {
        return None;
    }
    let mut table = AnnotationRecord::mocked(jpa::TABLE, Some(AnnotationTarget::class(class)), Vec::new());
    apply_schema_defaults(&mut table, defaults);
    Some(table)
}
