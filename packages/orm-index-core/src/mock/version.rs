use super::common::{emit_column, emit_temporal};
use super::property::prepare;
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::Version;
use crate::names::jpa;

pub fn mock_version(ctx: &mut MockContext<'_>, version: &mut Version) -> Result<AnnotationTarget> {
    let target = prepare(ctx, version)?;
    ctx.marker(jpa::VERSION, &target)?;
    emit_column(ctx, &target, version.column.as_ref())?;
    emit_temporal(ctx, &target, jpa::TEMPORAL, version.temporal)?;
    Ok(target)
}
