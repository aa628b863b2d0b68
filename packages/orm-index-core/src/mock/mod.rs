//! Synthesis of mocked annotations from mapping documents.
//!
//! Each mapped element kind has one synthesizer function. They all emit
//! through [`AnnotationSink`] and share a [`MockContext`] carrying the class
//! being mapped and its effective defaults.

pub mod access;
mod attributes;
mod basic;
mod common;
mod element_collection;
mod embedded;
pub mod entity;
pub mod entity_mappings;
pub mod global;
mod id;
mod listener;
mod many_to_many;
mod many_to_one;
mod natural_id;
mod one_to_many;
mod one_to_one;
pub mod persistence_metadata;
mod property;
mod transient;
pub mod values;
mod version;

pub use entity::{EntityObjectMocker, ManagedType};
pub use entity_mappings::EntityMappingsMocker;
pub use global::GlobalAnnotations;

use crate::classes::ClassLoaderService;
use crate::defaults::MappingDefault;
use crate::error::Result;
use crate::index::{AnnotationRecord, AnnotationTarget, AnnotationValue, IndexBuilder};
use crate::model::MappingEnum;

/// Destination of synthesized annotations.
pub trait AnnotationSink {
    /// Records a mocked annotation and returns it.
    fn emit(
        &mut self,
        name: &str,
        target: Option<&AnnotationTarget>,
        values: Vec<AnnotationValue>,
    ) -> Result<AnnotationRecord>;
}

impl AnnotationSink for IndexBuilder {
    fn emit(
        &mut self,
        name: &str,
        target: Option<&AnnotationTarget>,
        values: Vec<AnnotationValue>,
    ) -> Result<AnnotationRecord> {
        let record = AnnotationRecord::mocked(name, target.cloned(), values);
        self.add_annotation(record.clone())?;
        Ok(record)
    }
}

/// State shared by the synthesizers of one managed type.
pub(crate) struct MockContext<'a> {
    pub builder: &'a mut IndexBuilder,
    pub class_name: &'a str,
    pub defaults: &'a MappingDefault,
}

impl<'a> MockContext<'a> {
    pub fn new(builder: &'a mut IndexBuilder, class_name: &'a str, defaults: &'a MappingDefault) -> Self {
        Self {
            builder,
            class_name,
            defaults,
        }
    }

    pub fn class_target(&self) -> AnnotationTarget {
        AnnotationTarget::class(self.class_name)
    }

    pub fn loader(&self) -> &dyn ClassLoaderService {
        self.builder.class_loader()
    }

    pub fn package(&self) -> Option<&str> {
        self.defaults.package()
    }

    pub fn emit(
        &mut self,
        name: &str,
        target: &AnnotationTarget,
        values: Vec<AnnotationValue>,
    ) -> Result<()> {
        self.builder.emit(name, Some(target), values)?;
        Ok(())
    }

    /// Emits a marker annotation without values.
    pub fn marker(&mut self, name: &str, target: &AnnotationTarget) -> Result<()> {
        self.emit(name, target, Vec::new())
    }

    /// Emits `name(value=<constant>)`.
    pub fn enum_marker<E: MappingEnum>(
        &mut self,
        name: &str,
        target: &AnnotationTarget,
        value: Option<E>,
    ) -> Result<()> {
        if value.is_none() {
            return Ok(());
        }
        let mut values = Vec::new();
        values::enum_value("value", value, &mut values);
        self.emit(name, target, values)
    }

    /// Class reference resolved against the type's default package.
    pub fn class_value(
        &self,
        name: &str,
        class: Option<&str>,
        values: &mut Vec<AnnotationValue>,
    ) -> Result<()> {
        values::class_value(name, class, self.package(), self.loader(), values)
    }

    /// Whether associations cascade PERSIST by default.
    pub fn cascade_persist(&self) -> bool {
        self.defaults.is_cascade_persist()
    }
}
