//! Annotation records, their typed values and their targets.

use serde::{Deserialize, Serialize};

use crate::classes::decapitalize;

/// What an annotation decorates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnnotationTarget {
    Class { class: String },
    Field { class: String, name: String },
    Method { class: String, name: String },
}

impl AnnotationTarget {
    pub fn class(class: impl Into<String>) -> Self {
        Self::Class {
            class: class.into(),
        }
    }

    pub fn field(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Field {
            class: class.into(),
            name: name.into(),
        }
    }

    pub fn method(class: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Method {
            class: class.into(),
            name: name.into(),
        }
    }

    /// Name of the class owning the target.
    pub fn class_name(&self) -> &str {
        match self {
            Self::Class { class } | Self::Field { class, .. } | Self::Method { class, .. } => {
                class.as_str()
            }
        }
    }

    /// Field or method name; `None` for class targets.
    pub fn member_name(&self) -> Option<&str> {
        match self {
            Self::Class { .. } => None,
            Self::Field { name, .. } | Self::Method { name, .. } => Some(name.as_str()),
        }
    }

    /// Persistent property the member stands for.
    ///
    /// Getter names lose their `get`/`is`/`has` prefix and are decapitalized;
    /// other methods are returned verbatim.
    pub fn property_name(&self) -> Option<String> {
        match self {
            Self::Class { .. } => None,
            Self::Field { name, .. } => Some(name.clone()),
            Self::Method { name, .. } => {
                let stripped = ["get", "is", "has"]
                    .iter()
                    .filter_map(|prefix| name.strip_prefix(prefix))
                    .find(|rest| rest.chars().next().is_some_and(|c| c.is_uppercase()));
                Some(match stripped {
                    Some(rest) => decapitalize(rest),
                    None => name.clone(),
                })
            }
        }
    }

    pub fn is_class(&self) -> bool {
        matches!(self, Self::Class { .. })
    }

    pub fn is_field(&self) -> bool {
        matches!(self, Self::Field { .. })
    }

    pub fn is_method(&self) -> bool {
        matches!(self, Self::Method { .. })
    }
}

/// Typed value of one annotation attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "kebab-case")]
pub enum Value {
    String(String),
    Boolean(bool),
    Integer(i32),
    Long(i64),
    Enum { type_name: String, constant: String },
    Class(String),
    Nested(Box<AnnotationRecord>),
    Array(Vec<Value>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) | Self::Class(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_enum_constant(&self) -> Option<&str> {
        match self {
            Self::Enum { constant, .. } => Some(constant.as_str()),
            _ => None,
        }
    }

    pub fn as_nested(&self) -> Option<&AnnotationRecord> {
        match self {
            Self::Nested(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

/// A named attribute inside an annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationValue {
    pub name: String,
    pub value: Value,
}

impl AnnotationValue {
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One annotation occurrence: compiled, or synthesized from XML.
///
/// Nested annotations (a `@JoinColumn` inside `@JoinTable`) carry no target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub name: String,
    #[serde(default)]
    pub target: Option<AnnotationTarget>,
    #[serde(default)]
    pub values: Vec<AnnotationValue>,
    #[serde(default)]
    pub mocked: bool,
}

impl AnnotationRecord {
    /// A record as found in compiled classes.
    pub fn compiled(
        name: impl Into<String>,
        target: Option<AnnotationTarget>,
        values: Vec<AnnotationValue>,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            values,
            mocked: false,
        }
    }

    /// A record synthesized from an XML mapping.
    pub fn mocked(
        name: impl Into<String>,
        target: Option<AnnotationTarget>,
        values: Vec<AnnotationValue>,
    ) -> Self {
        Self {
            name: name.into(),
            target,
            values,
            mocked: true,
        }
    }

    /// Looks up an attribute value by name.
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.iter().find(|v| v.name == name).map(|v| &v.value)
    }

    /// Whether an attribute with this name is present.
    pub fn has_value(&self, name: &str) -> bool {
        self.value(name).is_some()
    }

    pub fn string_value(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_str)
    }

    pub fn enum_constant(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(Value::as_enum_constant)
    }

    /// Nested records of an array-valued attribute.
    pub fn nested_records(&self, name: &str) -> Vec<&AnnotationRecord> {
        match self.value(name) {
            Some(Value::Array(items)) => items.iter().filter_map(Value::as_nested).collect(),
            Some(Value::Nested(record)) => vec![record.as_ref()],
            _ => Vec::new(),
        }
    }

    /// Whether this record decorates the given class itself.
    pub fn targets_class(&self, class: &str) -> bool {
        matches!(&self.target, Some(AnnotationTarget::Class { class: c }) if c == class)
    }
}
