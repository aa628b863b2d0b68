//! XML mapping unification for annotation indexes.
//!
//! Translates parsed `orm.xml` style entity mappings into synthetic
//! ("mocked") annotation records and merges them with an index of compiled
//! annotations, so metadata consumers read both sources through one index.

pub mod classes;
pub mod config;
pub mod defaults;
pub mod error;
pub mod index;
pub mod mock;
pub mod model;
pub mod names;
pub mod unifier;

pub use classes::{ClassDescriptor, ClassLoaderService, ClassRegistry, MethodDescriptor};
pub use config::UnifierConfig;
pub use defaults::MappingDefault;
pub use error::{MockError, Result};
pub use index::{AnnotationIndex, AnnotationRecord, AnnotationTarget, AnnotationValue, ClassInfo, Value};
pub use unifier::{unify, Unified, Unifier};
