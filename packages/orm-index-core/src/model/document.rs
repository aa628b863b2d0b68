//! The mapping document root and persistence-unit metadata.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::global::{
    FetchProfile, FilterDef, NamedNativeQuery, NamedQuery, SequenceGenerator, SqlResultSetMapping,
    TableGenerator,
};
use super::managed::{Embeddable, Entity, EntityListeners, MappedSuperclass};
use super::AccessType;

/// `<persistence-unit-defaults>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PersistenceUnitDefaults {
    pub schema: Option<String>,
    pub catalog: Option<String>,
    pub access: Option<AccessType>,
    pub delimited_identifiers: bool,
    pub cascade_persist: bool,
    pub entity_listeners: Option<EntityListeners>,
}

/// `<persistence-unit-metadata>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PersistenceUnitMetadata {
    pub xml_mapping_metadata_complete: bool,
    pub persistence_unit_defaults: Option<PersistenceUnitDefaults>,
}

/// `<entity-mappings>`: one parsed mapping document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EntityMappings {
    pub description: Option<String>,
    pub persistence_unit_metadata: Option<PersistenceUnitMetadata>,
    pub package: Option<String>,
    pub schema: Option<String>,
    pub catalog: Option<String>,
    pub access: Option<AccessType>,
    /// Access written as free text by older mapping formats.
    pub access_name: Option<String>,
    pub sequence_generators: Vec<SequenceGenerator>,
    pub table_generators: Vec<TableGenerator>,
    pub named_queries: Vec<NamedQuery>,
    pub named_native_queries: Vec<NamedNativeQuery>,
    pub sql_result_set_mappings: Vec<SqlResultSetMapping>,
    pub filter_defs: Vec<FilterDef>,
    pub fetch_profiles: Vec<FetchProfile>,
    pub mapped_superclasses: Vec<MappedSuperclass>,
    pub entities: Vec<Entity>,
    pub embeddables: Vec<Embeddable>,
}

impl EntityMappings {
    /// Parses a mapping document from its JSON rendering.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Document access: the typed value, else the legacy name when it parses.
    pub fn effective_access(&self) -> Option<AccessType> {
        if self.access.is_some() {
            return self.access;
        }
        let name = self.access_name.as_deref()?;
        let parsed = AccessType::parse_lenient(name);
        if parsed.is_none() {
            tracing::warn!("Ignoring unparseable access name '{}' in mapping document", name);
        }
        parsed
    }
}
