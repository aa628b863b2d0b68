//! Persistence-unit metadata: unit-wide defaults and default listeners.

use super::listener::{mock_listener_class, DEFAULT_CALLBACKS};
use super::values::{class_array_value, enum_value, qualify_class_name};
use super::AnnotationSink;
use crate::config::UnifierConfig;
use crate::defaults::MappingDefault;
use crate::error::Result;
use crate::index::IndexBuilder;
use crate::model::{EntityMappings, PersistenceUnitDefaults, PersistenceUnitMetadata};
use crate::names::pseudo;

/// Picks the unit metadata of a set of documents and turns it into the
/// global defaulting layer.
#[derive(Debug, Default)]
pub struct PersistenceMetadataMocker {
    metadata: Option<PersistenceUnitMetadata>,
    duplicates: usize,
}

impl PersistenceMetadataMocker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `documents` for `<persistence-unit-metadata>`.
    ///
    /// The first block found wins; later blocks are logged and ignored.
    pub fn collect(documents: &[EntityMappings], config: &UnifierConfig) -> Self {
        let mut mocker = Self::new();
        for (position, document) in documents.iter().enumerate() {
            let Some(metadata) = document.persistence_unit_metadata.as_ref() else {
                continue;
            };
            if mocker.metadata.is_none() {
                mocker.metadata = Some(metadata.clone());
                continue;
            }
            mocker.duplicates += 1;
            if config.warn_on_duplicate_metadata {
                tracing::warn!(
                    "Duplicate <persistence-unit-metadata> in mapping document #{} ignored",
                    position
                );
            } else {
                tracing::debug!(
                    "Duplicate <persistence-unit-metadata> in mapping document #{} ignored",
                    position
                );
            }
        }
        mocker
    }

    /// The metadata block in effect, if any.
    pub fn metadata(&self) -> Option<&PersistenceUnitMetadata> {
        self.metadata.as_ref()
    }

    /// Number of ignored duplicate blocks.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    fn unit_defaults(&self) -> Option<&PersistenceUnitDefaults> {
        self.metadata.as_ref()?.persistence_unit_defaults.as_ref()
    }

    /// The persistence-unit defaulting layer.
    pub fn global_defaults(&self) -> MappingDefault {
        let Some(metadata) = self.metadata.as_ref() else {
            return MappingDefault::new();
        };
        let unit = metadata.persistence_unit_defaults.as_ref();
        MappingDefault {
            access: None,
            package: None,
            schema: unit.and_then(|u| u.schema.clone()),
            catalog: unit.and_then(|u| u.catalog.clone()),
            metadata_complete: Some(metadata.xml_mapping_metadata_complete),
            cascade_persist: Some(unit.is_some_and(|u| u.cascade_persist)),
        }
    }

    /// Emits the pseudo annotations standing for unit-wide settings.
    ///
    /// The unit access becomes a pseudo default-access marker rather than a
    /// defaulting layer: it only applies where nothing else decides access.
    pub fn mock(&self, builder: &mut IndexBuilder) -> Result<()> {
        let Some(unit) = self.unit_defaults() else {
            return Ok(());
        };
        if unit.access.is_some() {
            let mut values = Vec::new();
            enum_value("value", unit.access, &mut values);
            builder.emit(pseudo::DEFAULT_ACCESS, None, values)?;
        }
        if unit.delimited_identifiers {
            builder.emit(pseudo::DEFAULT_DELIMITED_IDENTIFIERS, None, Vec::new())?;
        }
        if let Some(listeners) = unit.entity_listeners.as_ref() {
            let names: Vec<String> = listeners
                .listeners
                .iter()
                .map(|l| qualify_class_name(&l.class, None))
                .collect();
            let mut values = Vec::new();
            class_array_value("value", &names, None, builder.class_loader(), &mut values)?;
            builder.emit(pseudo::DEFAULT_ENTITY_LISTENERS, None, values)?;

            let defaults = self.global_defaults();
            for (listener, name) in listeners.listeners.iter().zip(&names) {
                mock_listener_class(builder, name, &listener.callbacks, &DEFAULT_CALLBACKS, &defaults)?;
            }
        }
        Ok(())
    }
}
