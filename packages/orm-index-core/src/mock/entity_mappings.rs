//! Coordination of a whole persistence unit's mapping documents.

use std::collections::HashMap;

use super::entity::EntityObjectMocker;
use super::global::GlobalAnnotations;
use super::persistence_metadata::PersistenceMetadataMocker;
use crate::config::UnifierConfig;
use crate::defaults::MappingDefault;
use crate::error::Result;
use crate::index::IndexBuilder;
use crate::model::{AccessType, EntityMappings};

/// Mocks every document of a unit into one builder.
///
/// Runs in three steps: unit metadata, then every type's `pre_process`
/// across all documents, then every type's `process`, then the global
/// declarations.
#[derive(Debug)]
pub struct EntityMappingsMocker {
    documents: Vec<EntityMappings>,
    config: UnifierConfig,
    mockers: Vec<EntityObjectMocker>,
    global_defaults: MappingDefault,
}

impl EntityMappingsMocker {
    pub fn new(documents: Vec<EntityMappings>, config: UnifierConfig) -> Self {
        Self {
            documents,
            config,
            mockers: Vec::new(),
            global_defaults: MappingDefault::new(),
        }
    }

    /// Defaults of one document layered over the unit defaults.
    pub fn document_defaults(document: &EntityMappings, global: &MappingDefault) -> MappingDefault {
        let own = MappingDefault {
            access: document.effective_access(),
            package: document.package.clone(),
            schema: document.schema.clone(),
            catalog: document.catalog.clone(),
            metadata_complete: None,
            cascade_persist: None,
        };
        MappingDefault::layered([&own, global])
    }

    /// Runs the whole pass.
    pub fn mock(&mut self, builder: &mut IndexBuilder) -> Result<()> {
        let metadata = PersistenceMetadataMocker::collect(&self.documents, &self.config);
        self.global_defaults = metadata.global_defaults();
        metadata.mock(builder)?;

        let mut globals = GlobalAnnotations::new();
        for document in &self.documents {
            let defaults = Self::document_defaults(document, &self.global_defaults);
            globals.collect(document, &defaults)?;

            for mapped in &document.mapped_superclasses {
                let mut mocker = EntityObjectMocker::new(mapped.clone(), &defaults);
                mocker.pre_process(builder)?;
                self.mockers.push(mocker);
            }
            for embeddable in &document.embeddables {
                let mut mocker = EntityObjectMocker::new(embeddable.clone(), &defaults);
                mocker.pre_process(builder)?;
                self.mockers.push(mocker);
            }
            for entity in &document.entities {
                let mut mocker = EntityObjectMocker::new(entity.clone(), &defaults);
                mocker.pre_process(builder)?;
                self.mockers.push(mocker);
            }
        }

        for mocker in self.mockers.iter_mut() {
            mocker.process(builder)?;
        }

        globals.mock(builder, &self.global_defaults)?;
        tracing::debug!(
            "Mocked {} managed type(s) from {} mapping document(s)",
            self.mockers.len(),
            self.documents.len()
        );
        Ok(())
    }

    /// The type mockers, in processing order.
    pub fn mockers(&self) -> &[EntityObjectMocker] {
        &self.mockers
    }

    /// Final access type of every mocked class.
    pub fn resolved_accesses(&self) -> HashMap<String, AccessType> {
        self.mockers
            .iter()
            .filter_map(|m| m.access().map(|access| (m.class_name().to_string(), access)))
            .collect()
    }

    pub fn global_defaults(&self) -> &MappingDefault {
        &self.global_defaults
    }
}
