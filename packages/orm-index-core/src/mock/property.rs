//! Access resolution and member targeting shared by every attribute kind.

use super::access::resolve_attribute_access;
use super::values::string_value;
use super::MockContext;
use crate::classes::resolve_target;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::{AccessType, PersistentAttribute};
use crate::names::{hibernate, jpa};

/// Resolves the attribute's access, writes it back and returns its target.
///
/// `@Access` is emitted on the member only when the attribute element itself
/// declared an access type; `@AttributeAccessor` when a custom accessor is set.
pub fn prepare<A: PersistentAttribute>(ctx: &mut MockContext<'_>, attribute: &mut A) -> Result<AnnotationTarget> {
    let explicit = attribute.access();
    let access = resolve_attribute_access(
        ctx.builder,
        ctx.class_name,
        attribute.name(),
        explicit,
        ctx.defaults,
    )?;
    attribute.set_access(access);

    let target = resolve_target(ctx.loader(), ctx.class_name, attribute.name(), access)?;
    if explicit.is_some() {
        ctx.enum_marker(jpa::ACCESS, &target, Some(access))?;
    }
    if let Some(accessor) = attribute.attribute_accessor() {
        let mut values = Vec::new();
        string_value("value", Some(accessor), &mut values);
        ctx.emit(hibernate::ATTRIBUTE_ACCESSOR, &target, values)?;
    }
    Ok(target)
}

/// Target of an attribute that skips access resolution.
pub fn field_target(ctx: &MockContext<'_>, name: &str) -> Result<AnnotationTarget> {
    resolve_target(ctx.loader(), ctx.class_name, name, AccessType::Field)
}
