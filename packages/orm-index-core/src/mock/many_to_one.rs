use super::common::{emit_derived_identity, emit_extended_cascade, emit_join_columns, emit_join_table};
use super::property::prepare;
use super::values::{bool_value, cascade_value, enum_value};
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::ManyToOne;
use crate::names::jpa;

pub fn mock_many_to_one(ctx: &mut MockContext<'_>, association: &mut ManyToOne) -> Result<AnnotationTarget> {
    let target = prepare(ctx, association)?;

    let mut values = Vec::new();
    ctx.class_value("targetEntity", association.target_entity.as_deref(), &mut values)?;
    cascade_value("cascade", association.cascade.as_ref(), ctx.cascade_persist(), &mut values);
    enum_value("fetch", association.fetch, &mut values);
    bool_value("optional", association.optional, &mut values);
    ctx.emit(jpa::MANY_TO_ONE, &target, values)?;

    emit_join_columns(ctx, &target, &association.join_columns)?;
    emit_join_table(ctx, &target, association.join_table.as_ref())?;
    emit_derived_identity(ctx, &target, association.maps_id.as_deref(), association.id)?;
    emit_extended_cascade(ctx, &target, association.cascade.as_ref())?;
    Ok(target)
}
