//! Unification error types.

use thiserror::Error;

/// Errors raised while mocking XML mappings into an annotation index.
///
/// Every variant aborts the unification pass; recoverable anomalies are
/// logged and never surface here.
#[derive(Error, Debug)]
pub enum MockError {
    /// `@Id` annotations within one hierarchy disagree on field vs property placement
    #[error("Inconsistent placement of @Id annotation within hierarchy of '{class}'")]
    InconsistentIdPlacement { class: String },

    /// `<entity-listeners>` declared without any `<entity-listener>` child
    #[error("No listener classes found in <entity-listeners> of '{class}'")]
    EmptyEntityListeners { class: String },

    /// Two `<sql-result-set-mapping>` elements share a name within the unit
    #[error("Duplicated SQL result set mapping name '{0}'")]
    DuplicateResultSetMapping(String),

    /// `process()` invoked on an entity object before `pre_process()`
    #[error("pre_process must be called before process for '{0}'")]
    ProcessBeforePreProcess(String),

    /// Class could not be resolved through the class loading service
    #[error("Unable to load class '{0}'")]
    ClassNotFound(String),

    /// Field, getter or method missing on the resolved class
    #[error("Unable to load {kind} '{member}' of class '{class}'")]
    MemberNotFound {
        class: String,
        member: String,
        kind: &'static str,
    },

    /// Annotation pushed for a class the builder never created
    #[error("Class '{0}' not found in builder cache, create_class_info must be called first")]
    ClassNotCreated(String),

    /// Mapping shape that the engine deliberately does not support
    #[error("Not yet implemented: {0}")]
    NotYetImplemented(String),

    /// Mapping element missing a required value
    #[error("Invalid mapping: {0}")]
    InvalidMapping(String),

    /// Configuration could not be read or parsed
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// JSON (de)serialization of models or indexes failed
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// I/O error while reading inputs
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MockError>;
