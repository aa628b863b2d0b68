use super::basic::mock_basic;
use super::many_to_one::mock_many_to_one;
use super::values::bool_value;
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::NaturalId;
use crate::names::hibernate;

/// Natural-id members are mocked as usual, each followed by `@NaturalId`.
pub fn mock_natural_id(ctx: &mut MockContext<'_>, natural_id: &mut NaturalId) -> Result<()> {
    let mutable = natural_id.mutable;
    for basic in natural_id.basics.iter_mut() {
        let target = mock_basic(ctx, basic)?;
        emit_natural_id(ctx, &target, mutable)?;
    }
    for association in natural_id.many_to_ones.iter_mut() {
        let target = mock_many_to_one(ctx, association)?;
        emit_natural_id(ctx, &target, mutable)?;
    }
    Ok(())
}

fn emit_natural_id(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    mutable: Option<bool>,
) -> Result<()> {
    let mut values = Vec::new();
    bool_value("mutable", mutable, &mut values);
    ctx.emit(hibernate::NATURAL_ID, target, values)
}
