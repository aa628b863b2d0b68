//! Persistent attribute descriptors and their containers.

use serde::{Deserialize, Serialize};

use super::columns::{
    AssociationOverride, AttributeOverride, CollectionTable, Column, JoinColumn, JoinTable,
    OrderColumn, PrimaryKeyJoinColumn,
};
use super::global::{SequenceGenerator, TableGenerator};
use super::{AccessType, EnumType, FetchType, GenerationType, TemporalType};

/// Common view over every attribute descriptor.
///
/// The access type is mutable: it is resolved once and written back so
/// later readers see the resolved value rather than the declared one.
pub trait PersistentAttribute {
    fn name(&self) -> &str;
    fn access(&self) -> Option<AccessType>;
    fn set_access(&mut self, access: AccessType);
    fn attribute_accessor(&self) -> Option<&str>;
}

macro_rules! persistent_attribute {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl PersistentAttribute for $ty {
                fn name(&self) -> &str {
                    &self.name
                }

                fn access(&self) -> Option<AccessType> {
                    self.access
                }

                fn set_access(&mut self, access: AccessType) {
                    self.access = Some(access);
                }

                fn attribute_accessor(&self) -> Option<&str> {
                    self.attribute_accessor.as_deref()
                }
            }
        )+
    };
}

persistent_attribute!(
    Id,
    EmbeddedId,
    Version,
    Basic,
    Embedded,
    ElementCollection,
    ManyToOne,
    OneToMany,
    ManyToMany,
    OneToOne,
);

/// `<cascade>` flags. The last four belong to the Hibernate vocabulary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CascadeType {
    pub cascade_all: bool,
    pub cascade_persist: bool,
    pub cascade_merge: bool,
    pub cascade_remove: bool,
    pub cascade_refresh: bool,
    pub cascade_detach: bool,
    pub cascade_save_update: bool,
    pub cascade_replicate: bool,
    pub cascade_lock: bool,
    pub cascade_delete: bool,
}

impl CascadeType {
    /// Whether any Hibernate-only flag is set.
    pub fn has_extended(&self) -> bool {
        self.cascade_save_update || self.cascade_replicate || self.cascade_lock || self.cascade_delete
    }
}

/// `<generated-value>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct GeneratedValue {
    pub strategy: Option<GenerationType>,
    pub generator: Option<String>,
}

/// Name/value parameter of a generator or a custom type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Param {
    pub name: String,
    pub value: String,
}

/// Legacy `<generator class="...">` with free-form parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CustomGenerator {
    pub class: String,
    pub params: Vec<Param>,
}

/// `<type>` naming a custom Hibernate type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TypeSpec {
    pub name: String,
    pub params: Vec<Param>,
}

/// One entry of a basic attribute's column/formula list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColumnOrFormula {
    Column(Column),
    Formula(String),
}

/// `<column-transformer>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ColumnTransformer {
    pub for_column: Option<String>,
    pub read: Option<String>,
    pub write: Option<String>,
}

/// Map-key sub-elements shared by map-valued collections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct MapKeySpec {
    pub map_key: Option<String>,
    pub map_key_class: Option<String>,
    pub map_key_temporal: Option<TemporalType>,
    pub map_key_enumerated: Option<EnumType>,
    pub map_key_attribute_overrides: Vec<AttributeOverride>,
    pub map_key_column: Option<Column>,
    pub map_key_join_columns: Vec<JoinColumn>,
}

/// `<id>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Id {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub column: Option<Column>,
    pub generated_value: Option<GeneratedValue>,
    pub generator: Option<CustomGenerator>,
    pub temporal: Option<TemporalType>,
    pub sequence_generator: Option<SequenceGenerator>,
    pub table_generator: Option<TableGenerator>,
    #[serde(rename = "type")]
    pub type_spec: Option<TypeSpec>,
}

/// `<embedded-id>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EmbeddedId {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub attribute_overrides: Vec<AttributeOverride>,
}

/// `<version>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Version {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub column: Option<Column>,
    pub temporal: Option<TemporalType>,
}

/// `<basic>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Basic {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub fetch: Option<FetchType>,
    pub optional: Option<bool>,
    pub columns: Vec<ColumnOrFormula>,
    pub column_transformers: Vec<ColumnTransformer>,
    pub lob: bool,
    pub temporal: Option<TemporalType>,
    pub enumerated: Option<EnumType>,
    #[serde(rename = "type")]
    pub type_spec: Option<TypeSpec>,
}

/// `<embedded>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Embedded {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub attribute_overrides: Vec<AttributeOverride>,
    pub association_overrides: Vec<AssociationOverride>,
}

/// `<element-collection>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ElementCollection {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub target_class: Option<String>,
    pub fetch: Option<FetchType>,
    pub column: Option<Column>,
    pub collection_table: Option<CollectionTable>,
    pub lob: bool,
    pub temporal: Option<TemporalType>,
    pub enumerated: Option<EnumType>,
    pub collection_type: Option<String>,
    pub attribute_overrides: Vec<AttributeOverride>,
    pub association_overrides: Vec<AssociationOverride>,
    #[serde(flatten)]
    pub map_key: MapKeySpec,
    pub order_by: Option<String>,
    pub order_column: Option<OrderColumn>,
}

/// `<many-to-one>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ManyToOne {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub target_entity: Option<String>,
    pub fetch: Option<FetchType>,
    pub optional: Option<bool>,
    pub cascade: Option<CascadeType>,
    pub join_columns: Vec<JoinColumn>,
    pub join_table: Option<JoinTable>,
    pub maps_id: Option<String>,
    pub id: Option<bool>,
}

/// `<one-to-many>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OneToMany {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub target_entity: Option<String>,
    pub fetch: Option<FetchType>,
    pub mapped_by: Option<String>,
    pub orphan_removal: Option<bool>,
    pub cascade: Option<CascadeType>,
    pub join_columns: Vec<JoinColumn>,
    pub join_table: Option<JoinTable>,
    pub collection_type: Option<String>,
    #[serde(flatten)]
    pub map_key: MapKeySpec,
    pub order_by: Option<String>,
    pub order_column: Option<OrderColumn>,
}

/// `<many-to-many>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ManyToMany {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub target_entity: Option<String>,
    pub fetch: Option<FetchType>,
    pub mapped_by: Option<String>,
    pub cascade: Option<CascadeType>,
    pub join_table: Option<JoinTable>,
    pub collection_type: Option<String>,
    #[serde(flatten)]
    pub map_key: MapKeySpec,
    pub order_by: Option<String>,
    pub order_column: Option<OrderColumn>,
}

/// `<one-to-one>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OneToOne {
    pub name: String,
    pub access: Option<AccessType>,
    pub attribute_accessor: Option<String>,
    pub target_entity: Option<String>,
    pub fetch: Option<FetchType>,
    pub optional: Option<bool>,
    pub mapped_by: Option<String>,
    pub orphan_removal: Option<bool>,
    pub cascade: Option<CascadeType>,
    pub primary_key_join_columns: Vec<PrimaryKeyJoinColumn>,
    pub join_columns: Vec<JoinColumn>,
    pub join_table: Option<JoinTable>,
    pub maps_id: Option<String>,
    pub id: Option<bool>,
}

/// `<transient>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Transient {
    pub name: String,
}

/// `<natural-id>` grouping basics and many-to-ones.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NaturalId {
    pub mutable: Option<bool>,
    pub basics: Vec<Basic>,
    pub many_to_ones: Vec<ManyToOne>,
}

/// `<attributes>` of an entity or mapped superclass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Attributes {
    pub ids: Vec<Id>,
    pub embedded_id: Option<EmbeddedId>,
    pub transients: Vec<Transient>,
    pub versions: Vec<Version>,
    pub basics: Vec<Basic>,
    pub element_collections: Vec<ElementCollection>,
    pub embeddeds: Vec<Embedded>,
    pub many_to_manys: Vec<ManyToMany>,
    pub many_to_ones: Vec<ManyToOne>,
    pub one_to_manys: Vec<OneToMany>,
    pub one_to_ones: Vec<OneToOne>,
    pub natural_id: Option<NaturalId>,
}

/// `<attributes>` of an embeddable; it has no identifier or version groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EmbeddableAttributes {
    pub transients: Vec<Transient>,
    pub basics: Vec<Basic>,
    pub element_collections: Vec<ElementCollection>,
    pub embeddeds: Vec<Embedded>,
    pub many_to_manys: Vec<ManyToMany>,
    pub many_to_ones: Vec<ManyToOne>,
    pub one_to_manys: Vec<OneToMany>,
    pub one_to_ones: Vec<OneToOne>,
}

impl From<EmbeddableAttributes> for Attributes {
    fn from(attributes: EmbeddableAttributes) -> Self {
        Self {
            ids: Vec::new(),
            embedded_id: None,
            transients: attributes.transients,
            versions: Vec::new(),
            basics: attributes.basics,
            element_collections: attributes.element_collections,
            embeddeds: attributes.embeddeds,
            many_to_manys: attributes.many_to_manys,
            many_to_ones: attributes.many_to_ones,
            one_to_manys: attributes.one_to_manys,
            one_to_ones: attributes.one_to_ones,
            natural_id: None,
        }
    }
}
