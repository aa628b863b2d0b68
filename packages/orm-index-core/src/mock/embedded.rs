//! `<embedded>` and `<embedded-id>`.

use super::common::{emit_association_overrides, emit_attribute_overrides};
use super::property::prepare;
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::{Embedded, EmbeddedId};
use crate::names::jpa;

pub fn mock_embedded(ctx: &mut MockContext<'_>, embedded: &mut Embedded) -> Result<AnnotationTarget> {
    let target = prepare(ctx, embedded)?;
    ctx.marker(jpa::EMBEDDED, &target)?;
    emit_attribute_overrides(ctx, &target, &embedded.attribute_overrides, &[])?;
    emit_association_overrides(ctx, &target, &embedded.association_overrides)?;
    Ok(target)
}

pub fn mock_embedded_id(ctx: &mut MockContext<'_>, embedded_id: &mut EmbeddedId) -> Result<AnnotationTarget> {
    let target = prepare(ctx, embedded_id)?;
    ctx.marker(jpa::EMBEDDED_ID, &target)?;
    emit_attribute_overrides(ctx, &target, &embedded_id.attribute_overrides, &[])?;
    Ok(target)
}
