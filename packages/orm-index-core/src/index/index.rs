use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::annotation::AnnotationRecord;
use crate::error::Result;

/// Annotations indexed under one class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassInfo {
    pub name: String,
    #[serde(default)]
    pub super_name: Option<String>,
    #[serde(default)]
    pub annotations: Vec<AnnotationRecord>,
}

impl ClassInfo {
    /// Creates an empty class entry.
    pub fn new(name: impl Into<String>, super_name: Option<String>) -> Self {
        Self {
            name: name.into(),
            super_name,
            annotations: Vec::new(),
        }
    }

    /// Adds an annotation (builder style).
    pub fn with_annotation(mut self, annotation: AnnotationRecord) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Every annotation with the given name, in index order.
    pub fn annotations_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a AnnotationRecord> + 'a {
        self.annotations.iter().filter(move |a| a.name == name)
    }

    /// The annotation with the given name placed on the class itself.
    pub fn class_annotation(&self, name: &str) -> Option<&AnnotationRecord> {
        self.annotations
            .iter()
            .find(|a| a.name == name && a.targets_class(&self.name))
    }
}

/// Class → annotations associations plus class-independent annotations.
///
/// Classes are kept ordered by name so serialized indexes are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotationIndex {
    #[serde(default)]
    classes: BTreeMap<String, ClassInfo>,
    #[serde(default)]
    global_annotations: Vec<AnnotationRecord>,
}

impl AnnotationIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a class entry.
    pub fn add_class(&mut self, class: ClassInfo) {
        self.classes.insert(class.name.clone(), class);
    }

    /// Adds a class-independent annotation.
    pub fn add_global_annotation(&mut self, annotation: AnnotationRecord) {
        self.global_annotations.push(annotation);
    }

    pub fn class(&self, name: &str) -> Option<&ClassInfo> {
        self.classes.get(name)
    }

    pub fn contains_class(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Iterates class entries in name order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassInfo> {
        self.classes.values()
    }

    pub fn class_names(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    /// Annotations indexed under a class; empty when the class is unknown.
    pub fn annotations(&self, class: &str) -> &[AnnotationRecord] {
        self.classes
            .get(class)
            .map(|c| c.annotations.as_slice())
            .unwrap_or(&[])
    }

    pub fn global_annotations(&self) -> &[AnnotationRecord] {
        &self.global_annotations
    }

    /// Every annotation of the given name, global ones first.
    pub fn annotations_named(&self, name: &str) -> Vec<&AnnotationRecord> {
        self.global_annotations
            .iter()
            .chain(self.classes.values().flat_map(|c| c.annotations.iter()))
            .filter(|a| a.name == name)
            .collect()
    }

    /// Superclass name recorded for a class.
    pub fn super_name(&self, class: &str) -> Option<&str> {
        self.classes.get(class).and_then(|c| c.super_name.as_deref())
    }

    /// Number of class entries.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.global_annotations.is_empty()
    }

    /// Parses an index from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads an index from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    /// Renders the index as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
