use super::common::{emit_column_transformers, emit_columns_or_formulas, emit_enumerated, emit_lob, emit_temporal, emit_type};
use super::property::prepare;
use super::values::{bool_value, enum_value};
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::Basic;
use crate::names::jpa;

/// `<basic>`: `@Basic`, transformers, columns or formula, then type modifiers.
pub fn mock_basic(ctx: &mut MockContext<'_>, basic: &mut Basic) -> Result<AnnotationTarget> {
    let target = prepare(ctx, basic)?;

    let mut values = Vec::new();
    enum_value("fetch", basic.fetch, &mut values);
    bool_value("optional", basic.optional, &mut values);
    ctx.emit(jpa::BASIC, &target, values)?;

    emit_column_transformers(ctx, &target, &basic.column_transformers)?;
    emit_columns_or_formulas(ctx, &target, &basic.columns)?;
    emit_lob(ctx, &target, basic.lob)?;
    emit_temporal(ctx, &target, jpa::TEMPORAL, basic.temporal)?;
    emit_enumerated(ctx, &target, jpa::ENUMERATED, basic.enumerated)?;
    emit_type(ctx, &target, basic.type_spec.as_ref())?;
    Ok(target)
}
