//! Column, join and table sub-elements shared by many mapping elements.

use serde::{Deserialize, Serialize};

/// `<column>` (also used for `<map-key-column>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Column {
    pub name: Option<String>,
    pub unique: Option<bool>,
    pub nullable: Option<bool>,
    pub insertable: Option<bool>,
    pub updatable: Option<bool>,
    pub column_definition: Option<String>,
    pub table: Option<String>,
    pub length: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
}

impl Column {
    /// Column with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// `<join-column>` (also used for `<map-key-join-column>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct JoinColumn {
    pub name: Option<String>,
    pub referenced_column_name: Option<String>,
    pub unique: Option<bool>,
    pub nullable: Option<bool>,
    pub insertable: Option<bool>,
    pub updatable: Option<bool>,
    pub column_definition: Option<String>,
    pub table: Option<String>,
}

impl JoinColumn {
    /// Join column with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }
}

/// `<primary-key-join-column>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PrimaryKeyJoinColumn {
    pub name: Option<String>,
    pub referenced_column_name: Option<String>,
    pub column_definition: Option<String>,
}

/// `<unique-constraint>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct UniqueConstraint {
    pub name: Option<String>,
    pub column_names: Vec<String>,
}

/// `<index>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Index {
    pub name: Option<String>,
    pub column_list: String,
    pub unique: Option<bool>,
}

/// `<table>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Table {
    pub name: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub unique_constraints: Vec<UniqueConstraint>,
    pub indexes: Vec<Index>,
}

/// `<secondary-table>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SecondaryTable {
    pub name: String,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub primary_key_join_columns: Vec<PrimaryKeyJoinColumn>,
    pub unique_constraints: Vec<UniqueConstraint>,
    pub indexes: Vec<Index>,
}

/// `<join-table>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct JoinTable {
    pub name: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub join_columns: Vec<JoinColumn>,
    pub inverse_join_columns: Vec<JoinColumn>,
    pub unique_constraints: Vec<UniqueConstraint>,
    pub indexes: Vec<Index>,
}

/// `<collection-table>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct CollectionTable {
    pub name: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub join_columns: Vec<JoinColumn>,
    pub unique_constraints: Vec<UniqueConstraint>,
    pub indexes: Vec<Index>,
}

/// `<attribute-override>` (also `<map-key-attribute-override>`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AttributeOverride {
    pub name: String,
    pub column: Column,
}

/// `<association-override>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct AssociationOverride {
    pub name: String,
    pub join_columns: Vec<JoinColumn>,
    pub join_table: Option<JoinTable>,
}

/// `<order-column>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct OrderColumn {
    pub name: Option<String>,
    pub nullable: Option<bool>,
    pub insertable: Option<bool>,
    pub updatable: Option<bool>,
    pub column_definition: Option<String>,
}

/// `<discriminator-column>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct DiscriminatorColumn {
    pub name: Option<String>,
    pub discriminator_type: Option<super::DiscriminatorType>,
    pub column_definition: Option<String>,
    pub length: Option<i32>,
}
