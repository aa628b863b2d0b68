use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use super::annotation::AnnotationRecord;
use super::filter::remove_overridden;
use super::index::{AnnotationIndex, ClassInfo};
use super::schema_defaults::{apply_schema_defaults, default_table};
use crate::classes::ClassLoaderService;
use crate::defaults::MappingDefault;
use crate::error::{MockError, Result};
use crate::names::jpa;

/// Kind of a type declared in a mapping document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManagedKind {
    Entity,
    MappedSuperclass,
    Embeddable,
}

impl ManagedKind {
    /// Annotation marking a class of this kind.
    pub fn annotation_name(&self) -> &'static str {
        match self {
            Self::Entity => jpa::ENTITY,
            Self::MappedSuperclass => jpa::MAPPED_SUPERCLASS,
            Self::Embeddable => jpa::EMBEDDABLE,
        }
    }
}

#[derive(Debug)]
struct BuilderClass {
    super_name: Option<String>,
    // compiled annotations still in effect
    indexed: Vec<AnnotationRecord>,
    // synthesized from XML, in emission order
    mocked: Vec<AnnotationRecord>,
    metadata_complete: bool,
}

/// Accumulates mocked annotations and materializes the merged index.
///
/// Every class keeps two views: the compiled annotations that survive XML
/// overriding, and the annotations synthesized from XML. Readers during a
/// pass (access resolution, override merging) query either view; `build`
/// merges them.
#[derive(Debug)]
pub struct IndexBuilder {
    index: AnnotationIndex,
    class_loader: Arc<dyn ClassLoaderService>,
    classes: HashMap<String, BuilderClass>,
    creation_order: Vec<String>,
    managed: HashMap<String, ManagedKind>,
    global_annotations: Vec<AnnotationRecord>,
    global_finished: bool,
    finished: HashMap<String, ClassInfo>,
    // (listener class, first callback annotation of its table)
    listeners: HashSet<(String, &'static str)>,
}

impl IndexBuilder {
    /// Creates a builder over an existing index.
    pub fn new(index: AnnotationIndex, class_loader: Arc<dyn ClassLoaderService>) -> Self {
        Self {
            index,
            class_loader,
            classes: HashMap::new(),
            creation_order: Vec::new(),
            managed: HashMap::new(),
            global_annotations: Vec::new(),
            global_finished: false,
            finished: HashMap::new(),
            listeners: HashSet::new(),
        }
    }

    pub fn class_loader(&self) -> &dyn ClassLoaderService {
        self.class_loader.as_ref()
    }

    /// The index the pass started from.
    pub fn original_index(&self) -> &AnnotationIndex {
        &self.index
    }

    /// Prepares a class for receiving mocked annotations.
    ///
    /// The class must be known to the index or loadable. Creating an
    /// already created class is a no-op.
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(MockError::ClassNotFound)` otherwise.
    pub fn create_class_info(&mut self, name: &str) -> Result<()> {
        if self.classes.contains_key(name) {
            return Ok(());
        }
        let descriptor = self.class_loader.load_class(name);
        let indexed = self.index.class(name);
        if descriptor.is_none() && indexed.is_none() {
            return Err(MockError::ClassNotFound(name.to_string()));
        }

        let super_name = indexed
            .and_then(|c| c.super_name.clone())
            .or_else(|| descriptor.and_then(|d| d.super_name.clone()));
        let annotations = indexed.map(|c| c.annotations.clone()).unwrap_or_default();

        tracing::debug!("Creating class info for {}", name);
        self.classes.insert(
            name.to_string(),
            BuilderClass {
                super_name,
                indexed: annotations,
                mocked: Vec::new(),
                metadata_complete: false,
            },
        );
        self.creation_order.push(name.to_string());
        Ok(())
    }

    pub fn is_created(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Records that a mapping document declares `name` as a managed type.
    pub fn register_managed(&mut self, name: &str, kind: ManagedKind) {
        self.managed.insert(name.to_string(), kind);
    }

    pub fn managed_kind(&self, name: &str) -> Option<ManagedKind> {
        self.managed.get(name).copied()
    }

    /// Adds a mocked annotation, hiding the compiled annotations it overrides.
    ///
    /// Targetless annotations are class independent and go to the global list.
    pub fn add_annotation(&mut self, annotation: AnnotationRecord) -> Result<()> {
        let class_name = match annotation.target.as_ref() {
            Some(target) => target.class_name().to_string(),
            None => {
                self.add_global_annotation(annotation);
                return Ok(());
            }
        };
        let entry = self
            .classes
            .get_mut(&class_name)
            .ok_or(MockError::ClassNotCreated(class_name))?;
        remove_overridden(&mut entry.indexed, &annotation);
        entry.mocked.push(annotation);
        Ok(())
    }

    /// Drops every compiled annotation of a class whose XML mapping is complete.
    pub fn metadata_complete(&mut self, name: &str) -> Result<()> {
        let entry = self
            .classes
            .get_mut(name)
            .ok_or_else(|| MockError::ClassNotCreated(name.to_string()))?;
        tracing::debug!(
            "{} is metadata-complete, ignoring {} compiled annotation(s)",
            name,
            entry.indexed.len()
        );
        entry.indexed.clear();
        entry.metadata_complete = true;
        Ok(())
    }

    pub fn is_metadata_complete(&self, name: &str) -> bool {
        self.classes.get(name).is_some_and(|c| c.metadata_complete)
    }

    /// Annotations synthesized from XML for a class so far.
    pub fn orm_annotations(&self, name: &str) -> &[AnnotationRecord] {
        self.classes
            .get(name)
            .map(|c| c.mocked.as_slice())
            .unwrap_or(&[])
    }

    /// Compiled annotations of a class still in effect.
    ///
    /// Classes not touched by the pass report their original annotations.
    pub fn indexed_annotations(&self, name: &str) -> &[AnnotationRecord] {
        match self.classes.get(name) {
            Some(class) => class.indexed.as_slice(),
            None => self.index.annotations(name),
        }
    }

    /// Superclass of a class, from the pass, the index or the class loader.
    pub fn super_name(&self, name: &str) -> Option<String> {
        if let Some(class) = self.classes.get(name) {
            return class.super_name.clone();
        }
        if let Some(class) = self.index.class(name) {
            return class.super_name.clone();
        }
        self.class_loader
            .load_class(name)
            .and_then(|d| d.super_name.clone())
    }

    /// Whether a class is an entity, mapped superclass or embeddable, as
    /// declared in XML or by a class-level annotation in either view.
    pub fn is_entity_object(&self, name: &str) -> bool {
        if self.managed.contains_key(name) {
            return true;
        }
        self.orm_annotations(name)
            .iter()
            .chain(self.indexed_annotations(name).iter())
            .any(|a| {
                a.targets_class(name)
                    && (a.name == jpa::ENTITY
                        || a.name == jpa::MAPPED_SUPERCLASS
                        || a.name == jpa::EMBEDDABLE)
            })
    }

    /// Adds a class-independent annotation.
    pub fn add_global_annotation(&mut self, annotation: AnnotationRecord) {
        self.global_annotations.push(annotation);
    }

    /// Compiled then mocked class-independent annotations.
    pub fn global_annotations(&self) -> impl Iterator<Item = &AnnotationRecord> {
        self.index
            .global_annotations()
            .iter()
            .chain(self.global_annotations.iter())
    }

    /// Completes a class: applies deferred defaults and snapshots its merged
    /// annotations for the final index.
    ///
    /// Calling it again after more annotations were added replaces the snapshot.
    pub fn finish_entity_object(&mut self, name: &str, defaults: &MappingDefault) -> Result<()> {
        let entry = self
            .classes
            .get(name)
            .ok_or_else(|| MockError::ClassNotCreated(name.to_string()))?;

        let mut mocked = entry.mocked.clone();
        for annotation in mocked.iter_mut() {
            apply_schema_defaults(annotation, defaults);
        }
        if self.managed_kind(name) == Some(ManagedKind::Entity) {
            let has_table = mocked
                .iter()
                .chain(entry.indexed.iter())
                .any(|a| a.name == jpa::TABLE && a.targets_class(name));
            if !has_table {
                mocked.extend(default_table(name, defaults));
            }
        }

        let mut info = ClassInfo::new(name, entry.super_name.clone());
        info.annotations = entry.indexed.iter().cloned().chain(mocked).collect();
        tracing::debug!(
            "Finished {} with {} annotation(s)",
            name,
            info.annotations.len()
        );
        self.finished.insert(name.to_string(), info);
        Ok(())
    }

    /// Records that the callbacks of listener `name` were mocked under `scope`.
    ///
    /// Returns `false` when they already were, so shared listeners are
    /// mocked once per unit.
    pub fn mark_listener(&mut self, name: &str, scope: &'static str) -> bool {
        self.listeners.insert((name.to_string(), scope))
    }

    /// Applies document defaults to the mocked global annotations.
    pub fn finish_global_configuration_mocking(&mut self, defaults: &MappingDefault) {
        for annotation in self.global_annotations.iter_mut() {
            apply_schema_defaults(annotation, defaults);
        }
        self.global_finished = true;
    }

    pub fn is_global_configuration_finished(&self) -> bool {
        self.global_finished
    }

    /// Materializes the merged index.
    ///
    /// Classes never finished are merged without deferred defaults.
    pub fn build(mut self) -> AnnotationIndex {
        let mut index = std::mem::take(&mut self.index);
        for name in &self.creation_order {
            let info = match self.finished.remove(name) {
                Some(info) => info,
                None => {
                    let Some(entry) = self.classes.get(name) else {
                        continue;
                    };
                    let mut info = ClassInfo::new(name.clone(), entry.super_name.clone());
                    info.annotations = entry
                        .indexed
                        .iter()
                        .chain(entry.mocked.iter())
                        .cloned()
                        .collect();
                    info
                }
            };
            index.add_class(info);
        }
        for annotation in self.global_annotations {
            index.add_global_annotation(annotation);
        }
        tracing::debug!(
            "Built merged index with {} classes and {} global annotation(s)",
            index.len(),
            index.global_annotations().len()
        );
        index
    }
}
