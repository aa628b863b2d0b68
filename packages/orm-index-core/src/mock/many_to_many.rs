use super::common::{
    emit_attribute_overrides, emit_collection_type, emit_extended_cascade, emit_join_table, emit_map_key,
    emit_ordering,
};
use super::property::prepare;
use super::values::{cascade_value, enum_value, string_value};
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::ManyToMany;
use crate::names::jpa;

pub fn mock_many_to_many(ctx: &mut MockContext<'_>, association: &mut ManyToMany) -> Result<AnnotationTarget> {
    let target = prepare(ctx, association)?;

    let mut values = Vec::new();
    ctx.class_value("targetEntity", association.target_entity.as_deref(), &mut values)?;
    cascade_value("cascade", association.cascade.as_ref(), ctx.cascade_persist(), &mut values);
    enum_value("fetch", association.fetch, &mut values);
    string_value("mappedBy", association.mapped_by.as_deref(), &mut values);
    ctx.emit(jpa::MANY_TO_MANY, &target, values)?;

    emit_join_table(ctx, &target, association.join_table.as_ref())?;
    emit_collection_type(ctx, &target, association.collection_type.as_deref())?;
    emit_attribute_overrides(ctx, &target, &[], &association.map_key.map_key_attribute_overrides)?;
    emit_map_key(ctx, &target, &association.map_key)?;
    emit_ordering(
        ctx,
        &target,
        association.order_by.as_deref(),
        association.order_column.as_ref(),
    )?;
    emit_extended_cascade(ctx, &target, association.cascade.as_ref())?;
    Ok(target)
}
