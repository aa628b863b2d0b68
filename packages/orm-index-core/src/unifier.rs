//! Entry point of a unification pass.

use std::collections::HashMap;
use std::sync::Arc;

use crate::classes::ClassLoaderService;
use crate::config::UnifierConfig;
use crate::error::Result;
use crate::index::{AnnotationIndex, IndexBuilder};
use crate::mock::EntityMappingsMocker;
use crate::model::{AccessType, EntityMappings};

/// Outcome of a pass: the merged index and the access type of each mocked class.
#[derive(Debug, Clone, PartialEq)]
pub struct Unified {
    pub index: AnnotationIndex,
    pub accesses: HashMap<String, AccessType>,
}

/// Merges mapping documents into an annotation index.
///
/// Any error aborts the whole pass; no partial index is returned.
#[derive(Debug, Clone, Default)]
pub struct Unifier {
    config: UnifierConfig,
}

impl Unifier {
    pub fn new(config: UnifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &UnifierConfig {
        &self.config
    }

    /// Merges `documents` into `index`.
    ///
    /// # Arguments
    /// * `index` - Index of compiled annotations
    /// * `documents` - Parsed mapping documents, in unit order
    /// * `loader` - Resolves class references and members
    ///
    /// # Returns
    /// The merged index; `index` itself when there is nothing to mock.
    pub fn unify(
        &self,
        index: AnnotationIndex,
        documents: Vec<EntityMappings>,
        loader: Arc<dyn ClassLoaderService>,
    ) -> Result<AnnotationIndex> {
        Ok(self.unify_detailed(index, documents, loader)?.index)
    }

    /// Like [`Unifier::unify`], also reporting resolved access types.
    pub fn unify_detailed(
        &self,
        index: AnnotationIndex,
        documents: Vec<EntityMappings>,
        loader: Arc<dyn ClassLoaderService>,
    ) -> Result<Unified> {
        if documents.is_empty() || !self.config.xml_mapping_enabled {
            tracing::debug!("No XML mappings to unify, keeping the compiled index");
            return Ok(Unified {
                index,
                accesses: HashMap::new(),
            });
        }

        let document_count = documents.len();
        let mut builder = IndexBuilder::new(index, loader);
        let mut mocker = EntityMappingsMocker::new(documents, self.config.clone());
        mocker.mock(&mut builder)?;
        let accesses = mocker.resolved_accesses();

        let index = builder.build();
        tracing::info!(
            "Unified {} mapping document(s) into an index of {} classes",
            document_count,
            index.len()
        );
        Ok(Unified { index, accesses })
    }
}

/// Merges `documents` into `index` with the default configuration.
pub fn unify(
    index: AnnotationIndex,
    documents: Vec<EntityMappings>,
    loader: Arc<dyn ClassLoaderService>,
) -> Result<AnnotationIndex> {
    Unifier::default().unify(index, documents, loader)
}
