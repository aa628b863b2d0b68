//! `<id>` and its identifier generation.

use super::common::{emit_column, emit_temporal, emit_type, parameter_records};
use super::property::prepare;
use super::values::{enum_value, nested_array_value, string_value};
use super::MockContext;
use crate::error::Result;
use crate::index::AnnotationTarget;
use crate::model::{CustomGenerator, GeneratedValue, GenerationType, Id};
use crate::names::{hibernate, jpa};

const GENERATOR_SUFFIX: &str = "_generator";

/// Name given to a legacy custom generator of `class.attribute`.
pub fn custom_generator_name(class: &str, attribute: &str) -> String {
    format!("{}.{}{}", class, attribute, GENERATOR_SUFFIX)
}

pub fn mock_id(ctx: &mut MockContext<'_>, id: &mut Id) -> Result<AnnotationTarget> {
    let target = prepare(ctx, id)?;
    ctx.marker(jpa::ID, &target)?;
    emit_column(ctx, &target, id.column.as_ref())?;
    emit_temporal(ctx, &target, jpa::TEMPORAL, id.temporal)?;
    emit_type(ctx, &target, id.type_spec.as_ref())?;

    if let Some(generator) = id.generator.as_ref() {
        let name = custom_generator_name(ctx.class_name, &id.name);
        emit_custom_generator(ctx, &target, &name, generator)?;
    } else if let Some(generated) = id.generated_value.as_ref() {
        emit_generated_value(ctx, &target, generated)?;
    }
    Ok(target)
}

fn emit_custom_generator(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    name: &str,
    generator: &CustomGenerator,
) -> Result<()> {
    let mut values = Vec::new();
    string_value("name", Some(name), &mut values);
    string_value("strategy", Some(generator.class.as_str()), &mut values);
    nested_array_value("parameters", parameter_records(&generator.params), &mut values);
    ctx.emit(hibernate::GENERIC_GENERATOR, target, values)?;

    let mut values = Vec::new();
    string_value("generator", Some(name), &mut values);
    ctx.emit(jpa::GENERATED_VALUE, target, values)
}

fn emit_generated_value(
    ctx: &mut MockContext<'_>,
    target: &AnnotationTarget,
    generated: &GeneratedValue,
) -> Result<()> {
    let mut values = Vec::new();
    enum_value("strategy", generated.strategy, &mut values);
    string_value("generator", generated.generator.as_deref(), &mut values);
    ctx.emit(jpa::GENERATED_VALUE, target, values)?;

    let Some(generator) = generated.generator.as_deref().filter(|g| !g.is_empty()) else {
        return Ok(());
    };
    let strategy = generated.strategy.unwrap_or(GenerationType::Auto);
    let mut values = Vec::new();
    string_value("name", Some(generator), &mut values);
    string_value("strategy", Some(strategy.generator_strategy()), &mut values);
    ctx.emit(hibernate::GENERIC_GENERATOR, target, values)
}
