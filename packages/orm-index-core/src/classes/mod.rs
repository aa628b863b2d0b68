//! Class descriptors, the class-loading seam and member lookup.
//!
//! The engine never reflects over real bytecode. It only needs to know
//! which classes exist, who their superclass is, and which fields and
//! methods they declare, so a descriptor carries exactly that.

mod builtin_classes;
mod class_registry;
mod members;

use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use builtin_classes::register_builtin_classes;
pub use class_registry::ClassRegistry;
pub(crate) use members::decapitalize;
pub use members::{find_field, find_getter, resolve_method_target, resolve_target};

/// A declared method and its arity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodDescriptor {
    pub name: String,
    #[serde(default)]
    pub parameter_count: usize,
}

impl MethodDescriptor {
    /// Creates a method descriptor.
    pub fn new(name: impl Into<String>, parameter_count: usize) -> Self {
        Self {
            name: name.into(),
            parameter_count,
        }
    }
}

/// Loadable class shape: name, superclass and declared members.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDescriptor {
    pub name: String,
    #[serde(default)]
    pub super_name: Option<String>,
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

impl ClassDescriptor {
    /// Creates a descriptor without members.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            super_name: None,
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Sets the superclass name.
    pub fn extends(mut self, super_name: impl Into<String>) -> Self {
        self.super_name = Some(super_name.into());
        self
    }

    /// Adds a declared field.
    pub fn with_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(name.into());
        self
    }

    /// Adds a declared method.
    pub fn with_method(mut self, name: impl Into<String>, parameter_count: usize) -> Self {
        self.methods.push(MethodDescriptor::new(name, parameter_count));
        self
    }

    /// Adds a zero-argument getter `get<Name>` for a property.
    pub fn with_getter(self, property: &str) -> Self {
        let mut chars = property.chars();
        let getter = match chars.next() {
            Some(first) => format!("get{}{}", first.to_ascii_uppercase(), chars.as_str()),
            None => "get".to_string(),
        };
        self.with_method(getter, 0)
    }

    /// Whether the class itself declares the field.
    pub fn declares_field(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f == name)
    }

    /// Simple name (last segment of the qualified name).
    pub fn simple_name(&self) -> &str {
        self.name.rsplit('.').next().unwrap_or(&self.name)
    }

    /// Package part of the qualified name, if any.
    pub fn package(&self) -> Option<&str> {
        self.name.rsplit_once('.').map(|(package, _)| package)
    }
}

/// Resolves class names to descriptors.
///
/// Resolution failure is reported as `None`; callers turn it into a fatal
/// error where a class is required.
pub trait ClassLoaderService: Send + Sync + Debug {
    fn load_class(&self, name: &str) -> Option<Arc<ClassDescriptor>>;
}
