//! Unit-wide declarations: generators, queries, result-set mappings,
//! filter definitions and fetch profiles.
//!
//! Declarations are collected across all documents (including those nested
//! in entities and ids) and emitted once, as class-independent annotations.

use std::collections::HashSet;

use super::common::unique_constraints_value;
use super::values::{
    class_value, enum_value, integer_value, nested, nested_array_value, qualify_class_name,
    string_value,
};
use super::AnnotationSink;
use crate::classes::ClassLoaderService;
use crate::defaults::MappingDefault;
use crate::error::{MockError, Result};
use crate::index::{AnnotationRecord, IndexBuilder};
use crate::model::{
    Entity, EntityMappings, FetchProfile, FilterDef, NamedNativeQuery, NamedQuery, QueryHint,
    SequenceGenerator, SqlResultSetMapping, TableGenerator,
};
use crate::names::{hibernate, jpa};

/// Collected unit-wide declarations.
#[derive(Debug, Default)]
pub struct GlobalAnnotations {
    table_generators: Vec<TableGenerator>,
    sequence_generators: Vec<SequenceGenerator>,
    named_queries: Vec<NamedQuery>,
    named_native_queries: Vec<NamedNativeQuery>,
    result_set_mappings: Vec<SqlResultSetMapping>,
    result_set_names: HashSet<String>,
    filter_defs: Vec<FilterDef>,
    fetch_profiles: Vec<FetchProfile>,
}

fn fill_default(value: &mut Option<String>, default: Option<&String>) {
    if value.is_none() {
        *value = default.cloned();
    }
}

impl GlobalAnnotations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether nothing was collected.
    pub fn is_empty(&self) -> bool {
        self.table_generators.is_empty()
            && self.sequence_generators.is_empty()
            && self.named_queries.is_empty()
            && self.named_native_queries.is_empty()
            && self.result_set_mappings.is_empty()
            && self.filter_defs.is_empty()
            && self.fetch_profiles.is_empty()
    }

    /// Collects the declarations of one document and of its entities.
    ///
    /// # Arguments
    /// * `document` - The mapping document
    /// * `defaults` - The document's effective defaults; schema and catalog
    ///   fill generators that declare neither, the package qualifies classes
    pub fn collect(&mut self, document: &EntityMappings, defaults: &MappingDefault) -> Result<()> {
        for generator in &document.table_generators {
            self.add_table_generator(generator, defaults);
        }
        for generator in &document.sequence_generators {
            self.add_sequence_generator(generator, defaults);
        }
        self.named_queries.extend(document.named_queries.iter().cloned());
        for query in &document.named_native_queries {
            self.add_native_query(query, defaults);
        }
        for mapping in &document.sql_result_set_mappings {
            self.add_result_set_mapping(mapping, defaults)?;
        }
        self.filter_defs.extend(document.filter_defs.iter().cloned());
        for profile in &document.fetch_profiles {
            let mut profile = profile.clone();
            for fetch in profile.fetches.iter_mut() {
                fetch.entity = qualify_class_name(&fetch.entity, defaults.package());
            }
            self.fetch_profiles.push(profile);
        }
        for entity in &document.entities {
            self.collect_entity(entity, defaults)?;
        }
        for mapped in &document.mapped_superclasses {
            for id in mapped.attributes.iter().flat_map(|a| a.ids.iter()) {
                if let Some(generator) = id.table_generator.as_ref() {
                    self.add_table_generator(generator, defaults);
                }
                if let Some(generator) = id.sequence_generator.as_ref() {
                    self.add_sequence_generator(generator, defaults);
                }
            }
        }
        Ok(())
    }

    fn collect_entity(&mut self, entity: &Entity, defaults: &MappingDefault) -> Result<()> {
        if let Some(generator) = entity.table_generator.as_ref() {
            self.add_table_generator(generator, defaults);
        }
        if let Some(generator) = entity.sequence_generator.as_ref() {
            self.add_sequence_generator(generator, defaults);
        }
        self.named_queries.extend(entity.named_queries.iter().cloned());
        for query in &entity.named_native_queries {
            self.add_native_query(query, defaults);
        }
        for mapping in &entity.sql_result_set_mappings {
            self.add_result_set_mapping(mapping, defaults)?;
        }
        for id in entity.attributes.iter().flat_map(|a| a.ids.iter()) {
            if let Some(generator) = id.table_generator.as_ref() {
                self.add_table_generator(generator, defaults);
            }
            if let Some(generator) = id.sequence_generator.as_ref() {
                self.add_sequence_generator(generator, defaults);
            }
        }
        Ok(())
    }

    fn add_table_generator(&mut self, generator: &TableGenerator, defaults: &MappingDefault) {
        let mut generator = generator.clone();
        fill_default(&mut generator.schema, defaults.schema.as_ref());
        fill_default(&mut generator.catalog, defaults.catalog.as_ref());
        self.table_generators.push(generator);
    }

    fn add_sequence_generator(&mut self, generator: &SequenceGenerator, defaults: &MappingDefault) {
        let mut generator = generator.clone();
        fill_default(&mut generator.schema, defaults.schema.as_ref());
        fill_default(&mut generator.catalog, defaults.catalog.as_ref());
        self.sequence_generators.push(generator);
    }

    fn add_native_query(&mut self, query: &NamedNativeQuery, defaults: &MappingDefault) {
        let mut query = query.clone();
        query.result_class = query
            .result_class
            .map(|class| qualify_class_name(&class, defaults.package()));
        self.named_native_queries.push(query);
    }

    fn add_result_set_mapping(&mut self, mapping: &SqlResultSetMapping, defaults: &MappingDefault) -> Result<()> {
        if !self.result_set_names.insert(mapping.name.clone()) {
            return Err(MockError::DuplicateResultSetMapping(mapping.name.clone()));
        }
        let mut mapping = mapping.clone();
        for result in mapping.entity_results.iter_mut() {
            result.entity_class = qualify_class_name(&result.entity_class, defaults.package());
        }
        self.result_set_mappings.push(mapping);
        Ok(())
    }

    /// Emits every collected declaration and finishes global mocking.
    pub fn mock(&self, builder: &mut IndexBuilder, defaults: &MappingDefault) -> Result<()> {
        if !self.is_empty() {
            self.emit_wrapped(builder, hibernate::TABLE_GENERATORS, self.table_generator_records())?;
            self.emit_wrapped(builder, hibernate::SEQUENCE_GENERATORS, self.sequence_generator_records())?;
            self.emit_wrapped(builder, jpa::NAMED_QUERIES, self.named_query_records())?;
            let native_queries = self.native_query_records(builder.class_loader())?;
            self.emit_wrapped(builder, jpa::NAMED_NATIVE_QUERIES, native_queries)?;
            let result_set_mappings = self.result_set_mapping_records(builder.class_loader())?;
            self.emit_wrapped(builder, jpa::SQL_RESULT_SET_MAPPINGS, result_set_mappings)?;
            self.emit_wrapped(builder, hibernate::FILTER_DEFS, self.filter_def_records())?;
            let fetch_profiles = self.fetch_profile_records(builder.class_loader())?;
            self.emit_wrapped(builder, hibernate::FETCH_PROFILES, fetch_profiles)?;
            tracing::debug!(
                "Mocked {} named queries, {} native queries and {} result set mappings",
                self.named_queries.len(),
                self.named_native_queries.len(),
                self.result_set_mappings.len()
            );
        }
        builder.finish_global_configuration_mocking(defaults);
        Ok(())
    }

    fn emit_wrapped(&self, builder: &mut IndexBuilder, name: &str, records: Vec<AnnotationRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }
        let mut values = Vec::new();
        nested_array_value("value", records, &mut values);
        builder.emit(name, None, values)?;
        Ok(())
    }

    fn table_generator_records(&self) -> Vec<AnnotationRecord> {
        self.table_generators
            .iter()
            .map(|generator| {
                let mut values = Vec::new();
                string_value("name", Some(generator.name.as_str()), &mut values);
                string_value("table", generator.table.as_deref(), &mut values);
                string_value("catalog", generator.catalog.as_deref(), &mut values);
                string_value("schema", generator.schema.as_deref(), &mut values);
                string_value("pkColumnName", generator.pk_column_name.as_deref(), &mut values);
                string_value("valueColumnName", generator.value_column_name.as_deref(), &mut values);
                string_value("pkColumnValue", generator.pk_column_value.as_deref(), &mut values);
                integer_value("initialValue", generator.initial_value, &mut values);
                integer_value("allocationSize", generator.allocation_size, &mut values);
                unique_constraints_value(&generator.unique_constraints, &mut values);
                nested(jpa::TABLE_GENERATOR, values)
            })
            .collect()
    }

    fn sequence_generator_records(&self) -> Vec<AnnotationRecord> {
        self.sequence_generators
            .iter()
            .map(|generator| {
                let mut values = Vec::new();
                string_value("name", Some(generator.name.as_str()), &mut values);
                string_value("sequenceName", generator.sequence_name.as_deref(), &mut values);
                string_value("catalog", generator.catalog.as_deref(), &mut values);
                string_value("schema", generator.schema.as_deref(), &mut values);
                integer_value("initialValue", generator.initial_value, &mut values);
                integer_value("allocationSize", generator.allocation_size, &mut values);
                nested(jpa::SEQUENCE_GENERATOR, values)
            })
            .collect()
    }

    fn named_query_records(&self) -> Vec<AnnotationRecord> {
        self.named_queries
            .iter()
            .map(|query| {
                let mut values = Vec::new();
                string_value("name", Some(query.name.as_str()), &mut values);
                string_value("query", Some(query.query.as_str()), &mut values);
                enum_value("lockMode", query.lock_mode, &mut values);
                nested_array_value("hints", hint_records(&query.hints), &mut values);
                nested(jpa::NAMED_QUERY, values)
            })
            .collect()
    }

    fn native_query_records(&self, loader: &dyn ClassLoaderService) -> Result<Vec<AnnotationRecord>> {
        self.named_native_queries
            .iter()
            .map(|query| {
                let mut values = Vec::new();
                string_value("name", Some(query.name.as_str()), &mut values);
                string_value("query", Some(query.query.as_str()), &mut values);
                nested_array_value("hints", hint_records(&query.hints), &mut values);
                class_value("resultClass", query.result_class.as_deref(), None, loader, &mut values)?;
                string_value("resultSetMapping", query.result_set_mapping.as_deref(), &mut values);
                Ok(nested(jpa::NAMED_NATIVE_QUERY, values))
            })
            .collect()
    }

    fn result_set_mapping_records(&self, loader: &dyn ClassLoaderService) -> Result<Vec<AnnotationRecord>> {
        self.result_set_mappings
            .iter()
            .map(|mapping| {
                let entities = mapping
                    .entity_results
                    .iter()
                    .map(|result| {
                        let fields = result
                            .field_results
                            .iter()
                            .map(|field| {
                                let mut values = Vec::new();
                                string_value("name", Some(field.name.as_str()), &mut values);
                                string_value("column", Some(field.column.as_str()), &mut values);
                                nested(jpa::FIELD_RESULT, values)
                            })
                            .collect();
                        let mut values = Vec::new();
                        class_value(
                            "entityClass",
                            Some(result.entity_class.as_str()),
                            None,
                            loader,
                            &mut values,
                        )?;
                        nested_array_value("fields", fields, &mut values);
                        string_value(
                            "discriminatorColumn",
                            result.discriminator_column.as_deref(),
                            &mut values,
                        );
                        Ok(nested(jpa::ENTITY_RESULT, values))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let columns = mapping
                    .column_results
                    .iter()
                    .map(|column| {
                        let mut values = Vec::new();
                        string_value("name", Some(column.name.as_str()), &mut values);
                        nested(jpa::COLUMN_RESULT, values)
                    })
                    .collect();
                let mut values = Vec::new();
                string_value("name", Some(mapping.name.as_str()), &mut values);
                nested_array_value("entities", entities, &mut values);
                nested_array_value("columns", columns, &mut values);
                Ok(nested(jpa::SQL_RESULT_SET_MAPPING, values))
            })
            .collect()
    }

    fn filter_def_records(&self) -> Vec<AnnotationRecord> {
        self.filter_defs
            .iter()
            .map(|filter| {
                let parameters = filter
                    .params
                    .iter()
                    .map(|param| {
                        let mut values = Vec::new();
                        string_value("name", Some(param.name.as_str()), &mut values);
                        string_value("type", Some(param.type_name.as_str()), &mut values);
                        nested(hibernate::PARAM_DEF, values)
                    })
                    .collect();
                let mut values = Vec::new();
                string_value("name", Some(filter.name.as_str()), &mut values);
                string_value("defaultCondition", filter.condition.as_deref(), &mut values);
                nested_array_value("parameters", parameters, &mut values);
                nested(hibernate::FILTER_DEF, values)
            })
            .collect()
    }

    fn fetch_profile_records(&self, loader: &dyn ClassLoaderService) -> Result<Vec<AnnotationRecord>> {
        self.fetch_profiles
            .iter()
            .map(|profile| {
                let overrides = profile
                    .fetches
                    .iter()
                    .map(|fetch| {
                        let mut values = Vec::new();
                        class_value("entity", Some(fetch.entity.as_str()), None, loader, &mut values)?;
                        string_value("association", Some(fetch.association.as_str()), &mut values);
                        enum_value("mode", fetch.style, &mut values);
                        Ok(nested(hibernate::FETCH_OVERRIDE, values))
                    })
                    .collect::<Result<Vec<_>>>()?;
                let mut values = Vec::new();
                string_value("name", Some(profile.name.as_str()), &mut values);
                nested_array_value("fetchOverrides", overrides, &mut values);
                Ok(nested(hibernate::FETCH_PROFILE, values))
            })
            .collect()
    }
}

fn hint_records(hints: &[QueryHint]) -> Vec<AnnotationRecord> {
    hints
        .iter()
        .map(|hint| {
            let mut values = Vec::new();
            string_value("name", Some(hint.name.as_str()), &mut values);
            string_value("value", Some(hint.value.as_str()), &mut values);
            nested(jpa::QUERY_HINT, values)
        })
        .collect()
}
