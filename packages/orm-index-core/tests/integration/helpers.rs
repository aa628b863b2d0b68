//! Shared fixtures for the integration tests.

use std::sync::Arc;

use orm_index_core::classes::register_builtin_classes;
use orm_index_core::{
    AnnotationIndex, AnnotationRecord, AnnotationTarget, ClassDescriptor, ClassInfo, ClassLoaderService,
    ClassRegistry,
};

/// Registry holding the JDK builtins plus `classes`.
pub fn registry(classes: Vec<ClassDescriptor>) -> Arc<dyn ClassLoaderService> {
    let registry = ClassRegistry::new();
    register_builtin_classes(&registry).unwrap();
    registry.register_all(classes).unwrap();
    Arc::new(registry)
}

/// Index with one class carrying `annotations`.
pub fn add_compiled(
    index: &mut AnnotationIndex,
    class: &str,
    super_name: Option<&str>,
    annotations: Vec<(&str, AnnotationTarget)>,
) {
    let mut info = ClassInfo::new(class, super_name.map(str::to_string));
    for (name, target) in annotations {
        info = info.with_annotation(AnnotationRecord::compiled(name, Some(target), Vec::new()));
    }
    index.add_class(info);
}

/// Names of the annotations of `class` placed on `target`.
pub fn names_on<'a>(index: &'a AnnotationIndex, class: &str, target: &AnnotationTarget) -> Vec<&'a str> {
    index
        .annotations(class)
        .iter()
        .filter(|a| a.target.as_ref() == Some(target))
        .map(|a| a.name.as_str())
        .collect()
}
