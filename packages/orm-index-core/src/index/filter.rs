//! Removal of compiled annotations that an XML mapping overrides.
//!
//! A mocked annotation hides compiled annotations of the same kind on the
//! same class (class-level) or the same property (member-level). Some kinds
//! are mutually exclusive, so mocking one hides the whole group.

use super::annotation::{AnnotationRecord, AnnotationTarget};
use crate::names::{hibernate, jpa};

const MANAGED_TYPE_GROUP: &[&str] = &[jpa::ENTITY, jpa::MAPPED_SUPERCLASS, jpa::EMBEDDABLE];

const ATTRIBUTE_KIND_GROUP: &[&str] = &[
    jpa::ID,
    jpa::EMBEDDED_ID,
    jpa::VERSION,
    jpa::BASIC,
    jpa::EMBEDDED,
    jpa::ELEMENT_COLLECTION,
    jpa::MANY_TO_ONE,
    jpa::ONE_TO_MANY,
    jpa::MANY_TO_MANY,
    jpa::ONE_TO_ONE,
    jpa::TRANSIENT,
];

// Singular and plural forms are the same kind.
const PAIRED_GROUPS: &[&[&str]] = &[
    &[jpa::COLUMN, hibernate::COLUMNS, hibernate::FORMULA],
    &[jpa::JOIN_COLUMN, jpa::JOIN_COLUMNS],
    &[jpa::PRIMARY_KEY_JOIN_COLUMN, jpa::PRIMARY_KEY_JOIN_COLUMNS],
    &[jpa::MAP_KEY_JOIN_COLUMN, jpa::MAP_KEY_JOIN_COLUMNS],
    &[jpa::ATTRIBUTE_OVERRIDE, jpa::ATTRIBUTE_OVERRIDES],
    &[jpa::ASSOCIATION_OVERRIDE, jpa::ASSOCIATION_OVERRIDES],
    &[jpa::SECONDARY_TABLE, jpa::SECONDARY_TABLES],
    &[hibernate::COLUMN_TRANSFORMER, hibernate::COLUMN_TRANSFORMERS],
];

/// Names hidden by a mocked annotation named `name`.
pub fn overridden_names(name: &str) -> Vec<&str> {
    let groups = [MANAGED_TYPE_GROUP, ATTRIBUTE_KIND_GROUP]
        .into_iter()
        .chain(PAIRED_GROUPS.iter().copied());
    for group in groups {
        if group.contains(&name) {
            return group.to_vec();
        }
    }
    vec![name]
}

fn same_place(candidate: &AnnotationTarget, target: &AnnotationTarget) -> bool {
    if candidate.class_name() != target.class_name() {
        return false;
    }
    match (candidate.is_class(), target.is_class()) {
        (true, true) => true,
        (false, false) => candidate.property_name() == target.property_name(),
        _ => false,
    }
}

/// Drops the annotations in `compiled` that `mocked` overrides.
///
/// Returns the number of removed annotations. Global (targetless) mocked
/// annotations never hide anything.
pub fn remove_overridden(compiled: &mut Vec<AnnotationRecord>, mocked: &AnnotationRecord) -> usize {
    let Some(target) = mocked.target.as_ref() else {
        return 0;
    };
    let names = overridden_names(&mocked.name);
    let before = compiled.len();
    compiled.retain(|candidate| {
        let hidden = names.contains(&candidate.name.as_str())
            && candidate
                .target
                .as_ref()
                .is_some_and(|t| same_place(t, target));
        !hidden
    });
    let removed = before - compiled.len();
    if removed > 0 {
        tracing::debug!(
            "{} overrides {} compiled annotation(s) on {:?}",
            mocked.name,
            removed,
            target
        );
    }
    removed
}
