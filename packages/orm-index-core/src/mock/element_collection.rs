use super::common::{
    emit_association_overrides, emit_attribute_overrides, emit_collection_table, emit_collection_type, emit_column,
    emit_enumerated, emit_lob, emit_map_key, emit_ordering, emit_temporal,
};
use super::property::prepare;
use super::values::enum_value;
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::ElementCollection;
use crate::names::jpa;

/// `<element-collection>` of basic or embeddable values.
///
/// Map-key attribute overrides are folded into the attribute overrides with
/// a `key.` prefix.
pub fn mock_element_collection(
    ctx: &mut MockContext<'_>,
    collection: &mut ElementCollection,
) -> Result<AnnotationTarget> {
    let target = prepare(ctx, collection)?;

    let mut values = Vec::new();
    ctx.class_value("targetClass", collection.target_class.as_deref(), &mut values)?;
    enum_value("fetch", collection.fetch, &mut values);
    ctx.emit(jpa::ELEMENT_COLLECTION, &target, values)?;

    emit_column(ctx, &target, collection.column.as_ref())?;
    emit_collection_table(ctx, &target, collection.collection_table.as_ref())?;
    emit_lob(ctx, &target, collection.lob)?;
    emit_temporal(ctx, &target, jpa::TEMPORAL, collection.temporal)?;
    emit_enumerated(ctx, &target, jpa::ENUMERATED, collection.enumerated)?;
    emit_collection_type(ctx, &target, collection.collection_type.as_deref())?;
    emit_attribute_overrides(
        ctx,
        &target,
        &collection.attribute_overrides,
        &collection.map_key.map_key_attribute_overrides,
    )?;
    emit_association_overrides(ctx, &target, &collection.association_overrides)?;
    emit_map_key(ctx, &target, &collection.map_key)?;
    emit_ordering(
        ctx,
        &target,
        collection.order_by.as_deref(),
        collection.order_column.as_ref(),
    )?;
    Ok(target)
}
