//! Unit-wide declarations: generators, queries, result-set mappings,
//! filter definitions and fetch profiles.

use serde::{Deserialize, Serialize};

use super::columns::UniqueConstraint;
use super::{FetchMode, LockModeType};

/// `<sequence-generator>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SequenceGenerator {
    pub name: String,
    pub sequence_name: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub initial_value: Option<i32>,
    pub allocation_size: Option<i32>,
}

/// `<table-generator>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct TableGenerator {
    pub name: String,
    pub table: Option<String>,
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub pk_column_name: Option<String>,
    pub value_column_name: Option<String>,
    pub pk_column_value: Option<String>,
    pub initial_value: Option<i32>,
    pub allocation_size: Option<i32>,
    pub unique_constraints: Vec<UniqueConstraint>,
}

/// `<hint>` of a named query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct QueryHint {
    pub name: String,
    pub value: String,
}

/// `<named-query>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NamedQuery {
    pub name: String,
    pub query: String,
    pub lock_mode: Option<LockModeType>,
    pub hints: Vec<QueryHint>,
}

/// `<named-native-query>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct NamedNativeQuery {
    pub name: String,
    pub query: String,
    pub hints: Vec<QueryHint>,
    pub result_class: Option<String>,
    pub result_set_mapping: Option<String>,
}

/// `<field-result>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FieldResult {
    pub name: String,
    pub column: String,
}

/// `<entity-result>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct EntityResult {
    pub entity_class: String,
    pub discriminator_column: Option<String>,
    pub field_results: Vec<FieldResult>,
}

/// `<column-result>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ColumnResult {
    pub name: String,
}

/// `<sql-result-set-mapping>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SqlResultSetMapping {
    pub name: String,
    pub entity_results: Vec<EntityResult>,
    pub column_results: Vec<ColumnResult>,
}

/// `<filter-def>` parameter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FilterParam {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
}

/// `<filter-def>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FilterDef {
    pub name: String,
    pub condition: Option<String>,
    pub params: Vec<FilterParam>,
}

/// `<fetch>` of a fetch profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FetchOverride {
    pub entity: String,
    pub association: String,
    pub style: Option<FetchMode>,
}

/// `<fetch-profile>`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FetchProfile {
    pub name: String,
    pub fetches: Vec<FetchOverride>,
}
