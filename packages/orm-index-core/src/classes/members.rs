//! Member lookup for building annotation targets.
//!
//! A target always names the class being mapped, even when the member is
//! inherited from a superclass.

use super::ClassLoaderService;
use crate::error::{MockError, Result};
use crate::index::AnnotationTarget;
use crate::model::AccessType;

const GETTER_PREFIXES: [&str; 3] = ["get", "is", "has"];

/// Finds the class (starting at `class_name`) that declares field `name`.
pub fn find_field(loader: &dyn ClassLoaderService, class_name: &str, name: &str) -> Option<String> {
    let mut current = loader.load_class(class_name);
    while let Some(class) = current {
        if class.declares_field(name) {
            return Some(class.name.clone());
        }
        current = class.super_name.as_deref().and_then(|s| loader.load_class(s));
    }
    None
}

/// Finds the zero-argument getter backing property `name`.
///
/// A getter matches when its name starts with `get`, `is` or `has` and the
/// remainder equals the property name, decapitalized or verbatim.
pub fn find_getter(loader: &dyn ClassLoaderService, class_name: &str, name: &str) -> Option<String> {
    let mut current = loader.load_class(class_name);
    while let Some(class) = current {
        let getter = class
            .methods
            .iter()
            .filter(|m| m.parameter_count == 0)
            .find(|m| getter_matches(&m.name, name));
        if let Some(getter) = getter {
            return Some(getter.name.clone());
        }
        current = class.super_name.as_deref().and_then(|s| loader.load_class(s));
    }
    None
}

fn getter_matches(method: &str, property: &str) -> bool {
    GETTER_PREFIXES.iter().any(|prefix| {
        method
            .strip_prefix(prefix)
            .filter(|rest| !rest.is_empty())
            .map(|rest| rest == property || decapitalize(rest) == property)
            .unwrap_or(false)
    })
}

/// Lowercases the first character, as JavaBeans property naming does.
pub(crate) fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn find_method(loader: &dyn ClassLoaderService, class_name: &str, name: &str) -> bool {
    let mut current = loader.load_class(class_name);
    while let Some(class) = current {
        if class.methods.iter().any(|m| m.name == name) {
            return true;
        }
        current = class.super_name.as_deref().and_then(|s| loader.load_class(s));
    }
    false
}

/// Resolves the member annotated for attribute `name` under `access`.
///
/// FIELD access targets the field, PROPERTY access targets the getter.
///
/// # Returns
/// The target, or a fatal error when the class or member does not exist.
pub fn resolve_target(
    loader: &dyn ClassLoaderService,
    class_name: &str,
    name: &str,
    access: AccessType,
) -> Result<AnnotationTarget> {
    if loader.load_class(class_name).is_none() {
        return Err(MockError::ClassNotFound(class_name.to_string()));
    }

    match access {
        AccessType::Field => find_field(loader, class_name, name)
            .map(|_| AnnotationTarget::field(class_name, name))
            .ok_or_else(|| MockError::MemberNotFound {
                class: class_name.to_string(),
                member: name.to_string(),
                kind: "field",
            }),
        AccessType::Property => find_getter(loader, class_name, name)
            .map(|getter| AnnotationTarget::method(class_name, getter))
            .ok_or_else(|| MockError::MemberNotFound {
                class: class_name.to_string(),
                member: name.to_string(),
                kind: "property",
            }),
    }
}

/// Resolves a method by its exact name, as lifecycle callbacks name them.
pub fn resolve_method_target(
    loader: &dyn ClassLoaderService,
    class_name: &str,
    method: &str,
) -> Result<AnnotationTarget> {
    if loader.load_class(class_name).is_none() {
        return Err(MockError::ClassNotFound(class_name.to_string()));
    }
    if !find_method(loader, class_name, method) {
        return Err(MockError::MemberNotFound {
            class: class_name.to_string(),
            member: method.to_string(),
            kind: "method",
        });
    }
    Ok(AnnotationTarget::method(class_name, method))
}
