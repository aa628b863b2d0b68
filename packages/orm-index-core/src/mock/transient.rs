use super::property::field_target;
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::Transient;
use crate::names::jpa;

/// `<transient>` always targets the field and never takes part in access resolution.
pub fn mock_transient(ctx: &mut MockContext<'_>, transient: &Transient) -> Result<AnnotationTarget> {
    let target = field_target(ctx, &transient.name)?;
    ctx.marker(jpa::TRANSIENT, &target)?;
    Ok(target)
}
