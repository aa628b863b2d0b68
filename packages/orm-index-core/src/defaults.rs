//! Layered mapping defaults.
//!
//! Three scopes contribute defaults: the persistence unit, the mapping
//! document and the managed type itself. A value set in a narrower scope
//! is never replaced by a wider one; `None` means "inherit".

use crate::model::AccessType;

/// One defaulting scope.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingDefault {
    pub access: Option<AccessType>,
    pub package: Option<String>,
    pub schema: Option<String>,
    pub catalog: Option<String>,
    pub metadata_complete: Option<bool>,
    pub cascade_persist: Option<bool>,
}

impl MappingDefault {
    /// Creates an all-unset scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills every field that is unset here with the parent's value.
    ///
    /// Fields already set locally are kept.
    pub fn override_with(&mut self, parent: &MappingDefault) {
        if self.access.is_none() {
            self.access = parent.access;
        }
        if self.package.is_none() {
            self.package = parent.package.clone();
        }
        if self.schema.is_none() {
            self.schema = parent.schema.clone();
        }
        if self.catalog.is_none() {
            self.catalog = parent.catalog.clone();
        }
        if self.metadata_complete.is_none() {
            self.metadata_complete = parent.metadata_complete;
        }
        if self.cascade_persist.is_none() {
            self.cascade_persist = parent.cascade_persist;
        }
    }

    /// Resolves a chain of scopes, narrowest first.
    pub fn layered<'a>(scopes: impl IntoIterator<Item = &'a MappingDefault>) -> Self {
        let mut resolved = Self::new();
        for scope in scopes {
            resolved.override_with(scope);
        }
        resolved
    }

    /// Effective access, defaulting to PROPERTY.
    pub fn access_or_default(&self) -> AccessType {
        self.access.unwrap_or(AccessType::Property)
    }

    /// Whether the scope marks metadata as complete (default: false).
    pub fn is_metadata_complete(&self) -> bool {
        self.metadata_complete.unwrap_or(false)
    }

    /// Whether associations cascade PERSIST by default (default: false).
    pub fn is_cascade_persist(&self) -> bool {
        self.cascade_persist.unwrap_or(false)
    }

    /// Package used to qualify bare class names, if any.
    pub fn package(&self) -> Option<&str> {
        self.package.as_deref().filter(|p| !p.is_empty())
    }
}
