//! Top-level managed types: entities, mapped superclasses and embeddables.

use serde::{Deserialize, Serialize};

use super::attributes::{Attributes, EmbeddableAttributes};
use super::columns::{
    AssociationOverride, AttributeOverride, DiscriminatorColumn, PrimaryKeyJoinColumn,
    SecondaryTable, Table,
};
use super::global::{NamedNativeQuery, NamedQuery, SequenceGenerator, SqlResultSetMapping, TableGenerator};
use super::{AccessType, InheritanceType};

/// Lifecycle callback method names declared on a class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Callbacks {
    pub pre_persist: Option<String>,
    pub post_persist: Option<String>,
    pub pre_remove: Option<String>,
    pub post_remove: Option<String>,
    pub pre_update: Option<String>,
    pub post_update: Option<String>,
    pub post_load: Option<String>,
}

impl Callbacks {
    /// Whether no callback is declared.
    pub fn is_empty(&self) -> bool {
        self.pre_persist.is_none()
            && self.post_persist.is_none()
            && self.pre_remove.is_none()
            && self.post_remove.is_none()
            && self.pre_update.is_none()
            && self.post_update.is_none()
            && self.post_load.is_none()
    }
}

/// `<entity-listener>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EntityListener {
    pub class: String,
    #[serde(flatten)]
    pub callbacks: Callbacks,
}

/// `<entity-listeners>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EntityListeners {
    pub listeners: Vec<EntityListener>,
}

/// `<entity>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Entity {
    pub name: Option<String>,
    pub class: String,
    pub access: Option<AccessType>,
    pub cacheable: Option<bool>,
    pub metadata_complete: Option<bool>,
    pub table: Option<Table>,
    pub secondary_tables: Vec<SecondaryTable>,
    pub primary_key_join_columns: Vec<PrimaryKeyJoinColumn>,
    pub id_class: Option<String>,
    pub inheritance: Option<InheritanceType>,
    pub discriminator_value: Option<String>,
    pub discriminator_column: Option<DiscriminatorColumn>,
    pub sequence_generator: Option<SequenceGenerator>,
    pub table_generator: Option<TableGenerator>,
    pub named_queries: Vec<NamedQuery>,
    pub named_native_queries: Vec<NamedNativeQuery>,
    pub sql_result_set_mappings: Vec<SqlResultSetMapping>,
    pub exclude_default_listeners: bool,
    pub exclude_superclass_listeners: bool,
    pub entity_listeners: Option<EntityListeners>,
    #[serde(flatten)]
    pub callbacks: Callbacks,
    pub attribute_overrides: Vec<AttributeOverride>,
    pub association_overrides: Vec<AssociationOverride>,
    pub attributes: Option<Attributes>,
}

/// `<mapped-superclass>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MappedSuperclass {
    pub class: String,
    pub access: Option<AccessType>,
    pub metadata_complete: Option<bool>,
    pub id_class: Option<String>,
    pub exclude_default_listeners: bool,
    pub exclude_superclass_listeners: bool,
    pub entity_listeners: Option<EntityListeners>,
    #[serde(flatten)]
    pub callbacks: Callbacks,
    pub attributes: Option<Attributes>,
}

/// `<embeddable>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Embeddable {
    pub class: String,
    pub access: Option<AccessType>,
    pub metadata_complete: Option<bool>,
    pub attributes: Option<EmbeddableAttributes>,
}
