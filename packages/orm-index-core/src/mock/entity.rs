//! Entity-object orchestration.
//!
//! A mocker drives one `<entity>`, `<mapped-superclass>` or `<embeddable>`
//! through two phases. `pre_process` registers the class and everything that
//! only depends on the XML itself; `process` resolves the final access type
//! and emits all remaining annotations. Every mocker of a unit must finish
//! `pre_process` before any of them runs `process`, because access resolution
//! reads `@Id` annotations emitted for other classes of the hierarchy.

use super::access::resolve_entity_access;
use super::attributes::mock_attributes;
use super::common::{
    emit_association_overrides, emit_attribute_overrides, emit_discriminator_column, emit_primary_key_join_columns,
    emit_secondary_tables, emit_table,
};
use super::listener::{mock_callbacks, mock_entity_listeners, ENTITY_CALLBACKS};
use super::values::{bool_value, enum_value, qualify_class_name, string_value};
use super::{AnnotationSink, MockContext};
use crate::defaults::MappingDefault;
use crate::error::{MockError, Result};
use crate::index::{AnnotationTarget, IndexBuilder, ManagedKind};
use crate::model::{
    AccessType, Attributes, Callbacks, Embeddable, Entity, EntityListeners, MappedSuperclass,
};
use crate::names::jpa;

/// A managed type declared in a mapping document.
#[derive(Debug, Clone, PartialEq)]
pub enum ManagedType {
    Entity(Entity),
    MappedSuperclass(MappedSuperclass),
    Embeddable(Embeddable),
}

impl ManagedType {
    pub fn kind(&self) -> ManagedKind {
        match self {
            Self::Entity(_) => ManagedKind::Entity,
            Self::MappedSuperclass(_) => ManagedKind::MappedSuperclass,
            Self::Embeddable(_) => ManagedKind::Embeddable,
        }
    }

    /// Class name as written in the document.
    pub fn class(&self) -> &str {
        match self {
            Self::Entity(e) => &e.class,
            Self::MappedSuperclass(m) => &m.class,
            Self::Embeddable(e) => &e.class,
        }
    }

    /// Access declared on the type element itself.
    pub fn access(&self) -> Option<AccessType> {
        match self {
            Self::Entity(e) => e.access,
            Self::MappedSuperclass(m) => m.access,
            Self::Embeddable(e) => e.access,
        }
    }

    fn metadata_complete(&self) -> Option<bool> {
        match self {
            Self::Entity(e) => e.metadata_complete,
            Self::MappedSuperclass(m) => m.metadata_complete,
            Self::Embeddable(e) => e.metadata_complete,
        }
    }

    fn take_attributes(&mut self) -> Attributes {
        match self {
            Self::Entity(e) => e.attributes.take().unwrap_or_default(),
            Self::MappedSuperclass(m) => m.attributes.take().unwrap_or_default(),
            Self::Embeddable(e) => e.attributes.take().map(Attributes::from).unwrap_or_default(),
        }
    }

    fn listener_settings(&self) -> Option<(bool, bool, Option<&str>, Option<&EntityListeners>, &Callbacks)> {
        match self {
            Self::Entity(e) => Some((
                e.exclude_default_listeners,
                e.exclude_superclass_listeners,
                e.id_class.as_deref(),
                e.entity_listeners.as_ref(),
                &e.callbacks,
            )),
            Self::MappedSuperclass(m) => Some((
                m.exclude_default_listeners,
                m.exclude_superclass_listeners,
                m.id_class.as_deref(),
                m.entity_listeners.as_ref(),
                &m.callbacks,
            )),
            Self::Embeddable(_) => None,
        }
    }
}

impl From<Entity> for ManagedType {
    fn from(entity: Entity) -> Self {
        Self::Entity(entity)
    }
}

impl From<MappedSuperclass> for ManagedType {
    fn from(mapped: MappedSuperclass) -> Self {
        Self::MappedSuperclass(mapped)
    }
}

impl From<Embeddable> for ManagedType {
    fn from(embeddable: Embeddable) -> Self {
        Self::Embeddable(embeddable)
    }
}

/// Two-phase synthesizer of one managed type.
#[derive(Debug)]
pub struct EntityObjectMocker {
    managed: ManagedType,
    attributes: Attributes,
    class_name: String,
    defaults: MappingDefault,
    access: Option<AccessType>,
    pre_processed: bool,
}

impl EntityObjectMocker {
    /// Creates a mocker for `managed`.
    ///
    /// # Arguments
    /// * `managed` - The type element
    /// * `document_defaults` - Defaults of the enclosing document, already
    ///   layered over the persistence-unit defaults
    pub fn new(managed: impl Into<ManagedType>, document_defaults: &MappingDefault) -> Self {
        let mut managed = managed.into();
        let own = MappingDefault {
            access: managed.access(),
            metadata_complete: managed.metadata_complete(),
            ..Default::default()
        };
        let defaults = MappingDefault::layered([&own, document_defaults]);
        let class_name = qualify_class_name(managed.class(), defaults.package());
        let attributes = managed.take_attributes();
        Self {
            managed,
            attributes,
            class_name,
            defaults,
            access: None,
            pre_processed: false,
        }
    }

    /// Fully qualified class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn kind(&self) -> ManagedKind {
        self.managed.kind()
    }

    /// Access known so far: the declared one after `pre_process`, the final
    /// one after `process`.
    pub fn access(&self) -> Option<AccessType> {
        self.access
    }

    /// Attribute descriptors, carrying resolved access types after `process`.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn defaults(&self) -> &MappingDefault {
        &self.defaults
    }

    pub fn is_pre_processed(&self) -> bool {
        self.pre_processed
    }

    /// Registers the class with the builder.
    ///
    /// Creates the class entry, marks it metadata-complete when declared and
    /// emits a class-level `@Access` when the type element declares one.
    pub fn pre_process(&mut self, builder: &mut IndexBuilder) -> Result<()> {
        builder.create_class_info(&self.class_name)?;
        builder.register_managed(&self.class_name, self.kind());
        if self.defaults.is_metadata_complete() {
            builder.metadata_complete(&self.class_name)?;
        }

        self.access = self.defaults.access;
        if let Some(access) = self.managed.access() {
            let mut values = Vec::new();
            enum_value("value", Some(access), &mut values);
            builder.emit(jpa::ACCESS, Some(&AnnotationTarget::class(&self.class_name)), values)?;
        }
        self.pre_processed = true;
        tracing::debug!("Pre-processed {:?} {}", self.kind(), self.class_name);
        Ok(())
    }

    /// Emits every annotation of the type and finishes its class.
    ///
    /// # Returns
    /// `Err(MockError::ProcessBeforePreProcess)` when `pre_process` has not run.
    pub fn process(&mut self, builder: &mut IndexBuilder) -> Result<()> {
        if !self.pre_processed {
            return Err(MockError::ProcessBeforePreProcess(self.class_name.clone()));
        }

        let access = resolve_entity_access(builder, &self.class_name, &self.defaults)?;
        self.access = Some(access);
        tracing::debug!("Resolved {:?} access for {}", access, self.class_name);

        let mut ctx = MockContext::new(builder, &self.class_name, &self.defaults);
        let target = ctx.class_target();
        match &self.managed {
            ManagedType::Entity(entity) => mock_entity_header(&mut ctx, &target, entity)?,
            ManagedType::MappedSuperclass(_) => ctx.marker(jpa::MAPPED_SUPERCLASS, &target)?,
            ManagedType::Embeddable(_) => ctx.marker(jpa::EMBEDDABLE, &target)?,
        }

        let settings = self.managed.listener_settings();
        if let Some((exclude_default, exclude_superclass, id_class, _, _)) = settings {
            if exclude_default {
                ctx.marker(jpa::EXCLUDE_DEFAULT_LISTENERS, &target)?;
            }
            if exclude_superclass {
                ctx.marker(jpa::EXCLUDE_SUPERCLASS_LISTENERS, &target)?;
            }
            if id_class.is_some() {
                let mut values = Vec::new();
                ctx.class_value("value", id_class, &mut values)?;
                ctx.emit(jpa::ID_CLASS, &target, values)?;
            }
        }

        mock_attributes(&mut ctx, &mut self.attributes)?;

        if let Some((_, _, _, listeners, callbacks)) = settings {
            if let Some(listeners) = listeners {
                mock_entity_listeners(builder, &self.class_name, listeners, &self.defaults)?;
            }
            mock_callbacks(builder, &self.class_name, callbacks, &ENTITY_CALLBACKS)?;
        }

        builder.finish_entity_object(&self.class_name, &self.defaults)
    }
}

/// `@Entity` and the entity-only class-level annotations.
fn mock_entity_header(ctx: &mut MockContext<'_>, target: &AnnotationTarget, entity: &Entity) -> Result<()> {
    let mut values = Vec::new();
    string_value("name", entity.name.as_deref(), &mut values);
    ctx.emit(jpa::ENTITY, target, values)?;

    if entity.cacheable.is_some() {
        let mut values = Vec::new();
        bool_value("value", entity.cacheable, &mut values);
        ctx.emit(jpa::CACHEABLE, target, values)?;
    }
    emit_table(ctx, target, entity.table.as_ref())?;
    emit_secondary_tables(ctx, target, &entity.secondary_tables)?;
    emit_primary_key_join_columns(ctx, target, &entity.primary_key_join_columns)?;
    if entity.inheritance.is_some() {
        let mut values = Vec::new();
        enum_value("strategy", entity.inheritance, &mut values);
        ctx.emit(jpa::INHERITANCE, target, values)?;
    }
    if let Some(value) = entity.discriminator_value.as_deref() {
        let mut values = Vec::new();
        string_value("value", Some(value), &mut values);
        ctx.emit(jpa::DISCRIMINATOR_VALUE, target, values)?;
    }
    emit_discriminator_column(ctx, target, entity.discriminator_column.as_ref())?;
    emit_attribute_overrides(ctx, target, &entity.attribute_overrides, &[])?;
    emit_association_overrides(ctx, target, &entity.association_overrides)
}
