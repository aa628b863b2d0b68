//! Nested annotation builders and the sub-annotations shared by several
//! element kinds: columns, joins, tables, overrides, map keys, ordering.

use super::values::{
    bool_value, collection_type_name, enum_value, extended_cascade_value, integer_value, nested,
    nested_array_value, nested_value, string_array_value, string_value,
};
use super::MockContext;
use crate::error::{MockError, Result};
use crate::index::{AnnotationRecord, AnnotationTarget, AnnotationValue};
use crate::model::{
    AssociationOverride, AttributeOverride, CascadeType, CollectionTable, Column, ColumnOrFormula,
    ColumnTransformer, DiscriminatorColumn, EnumType, Index, JoinColumn, JoinTable, MapKeySpec,
    OrderColumn, Param, PrimaryKeyJoinColumn, SecondaryTable, Table, TemporalType, TypeSpec,
    UniqueConstraint,
};
use crate::names::{hibernate, jpa};

fn column_record(name: &str, column: &Column) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", column.name.as_deref(), &mut values);
    bool_value("unique", column.unique, &mut values);
    bool_value("nullable", column.nullable, &mut values);
    bool_value("insertable", column.insertable, &mut values);
    bool_value("updatable", column.updatable, &mut values);
    string_value("columnDefinition", column.column_definition.as_deref(), &mut values);
    string_value("table", column.table.as_deref(), &mut values);
    integer_value("length", column.length, &mut values);
    integer_value("precision", column.precision, &mut values);
    integer_value("scale", column.scale, &mut values);
    nested(name, values)
}

fn join_column_record(name: &str, column: &JoinColumn) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", column.name.as_deref(), &mut values);
    string_value(
        "referencedColumnName",
        column.referenced_column_name.as_deref(),
        &mut values,
    );
    bool_value("unique", column.unique, &mut values);
    bool_value("nullable", column.nullable, &mut values);
    bool_value("insertable", column.insertable, &mut values);
    bool_value("updatable", column.updatable, &mut values);
    string_value("columnDefinition", column.column_definition.as_deref(), &mut values);
    string_value("table", column.table.as_deref(), &mut values);
    nested(name, values)
}

fn join_column_records(name: &str, columns: &[JoinColumn]) -> Vec<AnnotationRecord> {
    columns.iter().map(|c| join_column_record(name, c)).collect()
}

fn primary_key_join_column_record(column: &PrimaryKeyJoinColumn) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", column.name.as_deref(), &mut values);
    string_value(
        "referencedColumnName",
        column.referenced_column_name.as_deref(),
        &mut values,
    );
    string_value("columnDefinition", column.column_definition.as_deref(), &mut values);
    nested(jpa::PRIMARY_KEY_JOIN_COLUMN, values)
}

fn unique_constraint_records(constraints: &[UniqueConstraint]) -> Vec<AnnotationRecord> {
    constraints
        .iter()
        .map(|constraint| {
            let mut values = Vec::new();
            string_value("name", constraint.name.as_deref(), &mut values);
            string_array_value("columnNames", &constraint.column_names, &mut values);
            nested(jpa::UNIQUE_CONSTRAINT, values)
        })
        .collect()
}

fn index_records(indexes: &[Index]) -> Vec<AnnotationRecord> {
    indexes
        .iter()
        .map(|index| {
            let mut values = Vec::new();
            string_value("name", index.name.as_deref(), &mut values);
            string_value("columnList", Some(index.column_list.as_str()), &mut values);
            bool_value("unique", index.unique, &mut values);
            nested(jpa::INDEX, values)
        })
        .collect()
}

pub fn unique_constraints_value(constraints: &[UniqueConstraint], values: &mut Vec<AnnotationValue>) {
    nested_array_value("uniqueConstraints", unique_constraint_records(constraints), values);
}

fn join_table_record(table: &JoinTable) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", table.name.as_deref(), &mut values);
    string_value("catalog", table.catalog.as_deref(), &mut values);
    string_value("schema", table.schema.as_deref(), &mut values);
    nested_array_value(
        "joinColumns",
        join_column_records(jpa::JOIN_COLUMN, &table.join_columns),
        &mut values,
    );
    nested_array_value(
        "inverseJoinColumns",
        join_column_records(jpa::JOIN_COLUMN, &table.inverse_join_columns),
        &mut values,
    );
    unique_constraints_value(&table.unique_constraints, &mut values);
    nested_array_value("indexes", index_records(&table.indexes), &mut values);
    nested(jpa::JOIN_TABLE, values)
}

fn collection_table_record(table: &CollectionTable) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", table.name.as_deref(), &mut values);
    string_value("catalog", table.catalog.as_deref(), &mut values);
    string_value("schema", table.schema.as_deref(), &mut values);
    nested_array_value(
        "joinColumns",
        join_column_records(jpa::JOIN_COLUMN, &table.join_columns),
        &mut values,
    );
    unique_constraints_value(&table.unique_constraints, &mut values);
    nested_array_value("indexes", index_records(&table.indexes), &mut values);
    nested(jpa::COLLECTION_TABLE, values)
}

fn table_record(table: &Table) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", table.name.as_deref(), &mut values);
    string_value("catalog", table.catalog.as_deref(), &mut values);
    string_value("schema", table.schema.as_deref(), &mut values);
    unique_constraints_value(&table.unique_constraints, &mut values);
    nested_array_value("indexes", index_records(&table.indexes), &mut values);
    nested(jpa::TABLE, values)
}

fn secondary_table_record(table: &SecondaryTable) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", Some(table.name.as_str()), &mut values);
    string_value("catalog", table.catalog.as_deref(), &mut values);
    string_value("schema", table.schema.as_deref(), &mut values);
    nested_array_value(
        "pkJoinColumns",
        table
            .primary_key_join_columns
            .iter()
            .map(primary_key_join_column_record)
            .collect(),
        &mut values,
    );
    unique_constraints_value(&table.unique_constraints, &mut values);
    nested_array_value("indexes", index_records(&table.indexes), &mut values);
    nested(jpa::SECONDARY_TABLE, values)
}

fn discriminator_column_record(column: &DiscriminatorColumn) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", column.name.as_deref(), &mut values);
    enum_value("discriminatorType", column.discriminator_type, &mut values);
    string_value("columnDefinition", column.column_definition.as_deref(), &mut values);
    integer_value("length", column.length, &mut values);
    nested(jpa::DISCRIMINATOR_COLUMN, values)
}

fn order_column_record(column: &OrderColumn) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", column.name.as_deref(), &mut values);
    bool_value("nullable", column.nullable, &mut values);
    bool_value("insertable", column.insertable, &mut values);
    bool_value("updatable", column.updatable, &mut values);
    string_value("columnDefinition", column.column_definition.as_deref(), &mut values);
    nested(jpa::ORDER_COLUMN, values)
}

fn attribute_override_record(name: &str, column: &Column) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", Some(name), &mut values);
    nested_value("column", Some(column_record(jpa::COLUMN, column)), &mut values);
    nested(jpa::ATTRIBUTE_OVERRIDE, values)
}

fn association_override_record(association: &AssociationOverride) -> AnnotationRecord {
    let mut values = Vec::new();
    string_value("name", Some(association.name.as_str()), &mut values);
    nested_array_value(
        "joinColumns",
        join_column_records(jpa::JOIN_COLUMN, &association.join_columns),
        &mut values,
    );
    nested_value(
        "joinTable",
        association.join_table.as_ref().map(join_table_record),
        &mut values,
    );
    nested(jpa::ASSOCIATION_OVERRIDE, values)
}

/// Emits a singular annotation for one entry, the plural wrapper otherwise.
fn emit_one_or_many(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    singular: &str,
    plural: &str,
    mut records: Vec<AnnotationRecord>,
) -> Result<()> {
    match records.len() {
        0 => Ok(()),
        1 => {
            let record = records.remove(0);
            ctx.emit(singular, target, record.values)
        }
        _ => {
            let mut values = Vec::new();
            nested_array_value("value", records, &mut values);
            ctx.emit(plural, target, values)
        }
    }
}

pub fn emit_column(ctx: &mut MockContext<'_>, target: &AnnotationTarget, column: Option<&Column>) -> Result<()> {
    match column {
        Some(column) => ctx.emit(jpa::COLUMN, target, column_record(jpa::COLUMN, column).values),
        None => Ok(()),
    }
}

/// Columns and formulas of a basic attribute.
///
/// One column gives `@Column`, one formula `@Formula`, several columns
/// `@Columns`. Several entries mixing in a formula are not supported.
pub fn emit_columns_or_formulas(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    entries: &[ColumnOrFormula],
) -> Result<()> {
    match entries {
        [] => Ok(()),
        [ColumnOrFormula::Column(column)] => emit_column(ctx, target, Some(column)),
        [ColumnOrFormula::Formula(formula)] => {
            let mut values = Vec::new();
            string_value("value", Some(formula.as_str()), &mut values);
            ctx.emit(hibernate::FORMULA, target, values)
        }
        _ => {
            let columns = entries
                .iter()
                .map(|entry| match entry {
                    ColumnOrFormula::Column(column) => Ok(column_record(jpa::COLUMN, column)),
                    ColumnOrFormula::Formula(_) => Err(MockError::NotYetImplemented(format!(
                        "mixed column and formula mapping of {:?}",
                        target
                    ))),
                })
                .collect::<Result<Vec<_>>>()?;
            let mut values = Vec::new();
            nested_array_value("columns", columns, &mut values);
            ctx.emit(hibernate::COLUMNS, target, values)
        }
    }
}

pub fn emit_column_transformers(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    transformers: &[ColumnTransformer],
) -> Result<()> {
    let records = transformers
        .iter()
        .map(|transformer| {
            let mut values = Vec::new();
            string_value("forColumn", transformer.for_column.as_deref(), &mut values);
            string_value("read", transformer.read.as_deref(), &mut values);
            string_value("write", transformer.write.as_deref(), &mut values);
            nested(hibernate::COLUMN_TRANSFORMER, values)
        })
        .collect();
    emit_one_or_many(
        ctx,
        target,
        hibernate::COLUMN_TRANSFORMER,
        hibernate::COLUMN_TRANSFORMERS,
        records,
    )
}

pub fn emit_join_columns(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    columns: &[JoinColumn],
) -> Result<()> {
    let records = join_column_records(jpa::JOIN_COLUMN, columns);
    emit_one_or_many(ctx, target, jpa::JOIN_COLUMN, jpa::JOIN_COLUMNS, records)
}

pub fn emit_primary_key_join_columns(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    columns: &[PrimaryKeyJoinColumn],
) -> Result<()> {
    let records = columns.iter().map(primary_key_join_column_record).collect();
    emit_one_or_many(
        ctx,
        target,
        jpa::PRIMARY_KEY_JOIN_COLUMN,
        jpa::PRIMARY_KEY_JOIN_COLUMNS,
        records,
    )
}

pub fn emit_join_table(ctx: &mut MockContext<'_>, target: &AnnotationTarget, table: Option<&JoinTable>) -> Result<()> {
    match table {
        Some(table) => ctx.emit(jpa::JOIN_TABLE, target, join_table_record(table).values),
        None => Ok(()),
    }
}

pub fn emit_collection_table(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    table: Option<&CollectionTable>,
) -> Result<()> {
    match table {
        Some(table) => ctx.emit(jpa::COLLECTION_TABLE, target, collection_table_record(table).values),
        None => Ok(()),
    }
}

pub fn emit_lob(ctx: &mut MockContext<'_>, target: &AnnotationTarget, lob: bool) -> Result<()> {
    if lob {
        ctx.marker(jpa::LOB, target)?;
    }
    Ok(())
}

pub fn emit_temporal(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    name: &str,
    temporal: Option<TemporalType>,
) -> Result<()> {
    ctx.enum_marker(name, target, temporal)
}

pub fn emit_enumerated(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    name: &str,
    enumerated: Option<EnumType>,
) -> Result<()> {
    ctx.enum_marker(name, target, enumerated)
}

/// `@Type(type=..., parameters=[@Parameter...])`.
pub fn emit_type(ctx: &mut MockContext<'_>, target: &AnnotationTarget, spec: Option<&TypeSpec>) -> Result<()> {
    let Some(spec) = spec else {
        return Ok(());
    };
    let mut values = Vec::new();
    string_value("type", Some(spec.name.as_str()), &mut values);
    nested_array_value("parameters", parameter_records(&spec.params), &mut values);
    ctx.emit(hibernate::TYPE, target, values)
}

pub fn parameter_records(params: &[Param]) -> Vec<AnnotationRecord> {
    params
        .iter()
        .map(|param| {
            let mut values = Vec::new();
            string_value("name", Some(param.name.as_str()), &mut values);
            string_value("value", Some(param.value.as_str()), &mut values);
            nested(hibernate::PARAMETER, values)
        })
        .collect()
}

/// `@CollectionType` with abbreviated keywords expanded.
pub fn emit_collection_type(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    collection_type: Option<&str>,
) -> Result<()> {
    let Some(keyword) = collection_type.filter(|k| !k.is_empty()) else {
        return Ok(());
    };
    let mut values = Vec::new();
    string_value("type", Some(collection_type_name(keyword).as_str()), &mut values);
    ctx.emit(hibernate::COLLECTION_TYPE, target, values)
}

fn same_property(candidate: &AnnotationTarget, target: &AnnotationTarget) -> bool {
    candidate.class_name() == target.class_name()
        && candidate.is_class() == target.is_class()
        && candidate.property_name() == target.property_name()
}

/// Override records already placed on `target` by compiled or earlier mocked annotations.
fn existing_overrides(
    ctx: &MockContext<'_>,
    target: &AnnotationTarget,
    singular: &str,
    plural: &str,
) -> Vec<AnnotationRecord> {
    let class = target.class_name();
    let mut found = Vec::new();
    let annotations = ctx
        .builder
        .indexed_annotations(class)
        .iter()
        .chain(ctx.builder.orm_annotations(class).iter());
    for annotation in annotations {
        let on_target = annotation
            .target
            .as_ref()
            .is_some_and(|t| same_property(t, target));
        if !on_target {
            continue;
        }
        if annotation.name == singular {
            found.push(nested(singular, annotation.values.clone()));
        } else if annotation.name == plural {
            found.extend(annotation.nested_records("value").into_iter().cloned());
        }
    }
    found
}

/// Folds existing overrides whose names the XML does not declare into `records`.
fn merge_overrides(
    ctx: &MockContext<'_>,
    target: &AnnotationTarget,
    singular: &str,
    plural: &str,
    mut records: Vec<AnnotationRecord>,
) -> Vec<AnnotationRecord> {
    if records.is_empty() {
        return records;
    }
    for existing in existing_overrides(ctx, target, singular, plural) {
        let name = existing.string_value("name").map(str::to_string);
        let duplicate = records
            .iter()
            .any(|r| r.string_value("name").map(str::to_string) == name);
        if !duplicate {
            records.push(existing);
        }
    }
    records
}

/// `@AttributeOverride(s)`, merged with the overrides already on the target.
///
/// # Arguments
/// * `overrides` - XML overrides, in document order
/// * `key_overrides` - map-key overrides, emitted with a `key.` prefix
pub fn emit_attribute_overrides(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    overrides: &[AttributeOverride],
    key_overrides: &[AttributeOverride],
) -> Result<()> {
    let records = overrides
        .iter()
        .map(|o| attribute_override_record(&o.name, &o.column))
        .chain(
            key_overrides
                .iter()
                .map(|o| attribute_override_record(&format!("key.{}", o.name), &o.column)),
        )
        .collect();
    let merged = merge_overrides(
        ctx,
        target,
        jpa::ATTRIBUTE_OVERRIDE,
        jpa::ATTRIBUTE_OVERRIDES,
        records,
    );
    emit_one_or_many(
        ctx,
        target,
        jpa::ATTRIBUTE_OVERRIDE,
        jpa::ATTRIBUTE_OVERRIDES,
        merged,
    )
}

/// `@AssociationOverride(s)`, merged with the overrides already on the target.
pub fn emit_association_overrides(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    overrides: &[AssociationOverride],
) -> Result<()> {
    let records = overrides.iter().map(association_override_record).collect();
    let merged = merge_overrides(
        ctx,
        target,
        jpa::ASSOCIATION_OVERRIDE,
        jpa::ASSOCIATION_OVERRIDES,
        records,
    );
    emit_one_or_many(
        ctx,
        target,
        jpa::ASSOCIATION_OVERRIDE,
        jpa::ASSOCIATION_OVERRIDES,
        merged,
    )
}

/// Map-key annotations of a map-valued collection.
///
/// Map-key attribute overrides are part of the attribute overrides and are
/// not emitted here.
pub fn emit_map_key(ctx: &mut MockContext<'_>, target: &AnnotationTarget, map_key: &MapKeySpec) -> Result<()> {
    if let Some(name) = map_key.map_key.as_deref() {
        let mut values = Vec::new();
        string_value("name", Some(name), &mut values);
        ctx.emit(jpa::MAP_KEY, target, values)?;
    }
    if map_key.map_key_class.is_some() {
        let mut values = Vec::new();
        ctx.class_value("value", map_key.map_key_class.as_deref(), &mut values)?;
        ctx.emit(jpa::MAP_KEY_CLASS, target, values)?;
    }
    emit_temporal(ctx, target, jpa::MAP_KEY_TEMPORAL, map_key.map_key_temporal)?;
    emit_enumerated(ctx, target, jpa::MAP_KEY_ENUMERATED, map_key.map_key_enumerated)?;
    if let Some(column) = map_key.map_key_column.as_ref() {
        ctx.emit(
            jpa::MAP_KEY_COLUMN,
            target,
            column_record(jpa::MAP_KEY_COLUMN, column).values,
        )?;
    }
    let join_columns = join_column_records(jpa::MAP_KEY_JOIN_COLUMN, &map_key.map_key_join_columns);
    emit_one_or_many(
        ctx,
        target,
        jpa::MAP_KEY_JOIN_COLUMN,
        jpa::MAP_KEY_JOIN_COLUMNS,
        join_columns,
    )
}

/// `@OrderBy` then `@OrderColumn`.
pub fn emit_ordering(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    order_by: Option<&str>,
    order_column: Option<&OrderColumn>,
) -> Result<()> {
    if let Some(order_by) = order_by {
        let mut values = Vec::new();
        string_value("value", Some(order_by), &mut values);
        ctx.emit(jpa::ORDER_BY, target, values)?;
    }
    if let Some(column) = order_column {
        ctx.emit(jpa::ORDER_COLUMN, target, order_column_record(column).values)?;
    }
    Ok(())
}

/// `@MapsId` and, for derived identities, `@Id`.
pub fn emit_derived_identity(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    maps_id: Option<&str>,
    id: Option<bool>,
) -> Result<()> {
    if let Some(maps_id) = maps_id {
        let mut values = Vec::new();
        string_value("value", Some(maps_id), &mut values);
        ctx.emit(jpa::MAPS_ID, target, values)?;
    }
    if id == Some(true) {
        ctx.marker(jpa::ID, target)?;
    }
    Ok(())
}

/// Hibernate `@Cascade` for flags outside the JPA vocabulary.
pub fn emit_extended_cascade(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    cascade: Option<&CascadeType>,
) -> Result<()> {
    match extended_cascade_value(cascade) {
        Some(values) => ctx.emit(hibernate::CASCADE, target, values),
        None => Ok(()),
    }
}

pub fn emit_table(ctx: &mut MockContext<'_>, target: &AnnotationTarget, table: Option<&Table>) -> Result<()> {
    match table {
        Some(table) => ctx.emit(jpa::TABLE, target, table_record(table).values),
        None => Ok(()),
    }
}

pub fn emit_secondary_tables(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    tables: &[SecondaryTable],
) -> Result<()> {
    let records = tables.iter().map(secondary_table_record).collect();
    emit_one_or_many(ctx, target, jpa::SECONDARY_TABLE, jpa::SECONDARY_TABLES, records)
}

pub fn emit_discriminator_column(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    column: Option<&DiscriminatorColumn>,
) -> Result<()> {
    match column {
        Some(column) => ctx.emit(
            jpa::DISCRIMINATOR_COLUMN,
            target,
            discriminator_column_record(column).values,
        ),
        None => Ok(()),
    }
}
