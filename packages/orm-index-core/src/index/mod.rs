//! In-process annotation index and the builder mocked annotations flow into.

mod annotation;
mod builder;
mod filter;
#[allow(clippy::module_inception)]
mod index;
mod schema_defaults;

pub use annotation::{AnnotationRecord, AnnotationTarget, AnnotationValue, Value};
pub use builder::{IndexBuilder, ManagedKind};
pub use filter::{overridden_names, remove_overridden};
pub use index::{AnnotationIndex, ClassInfo};
pub use schema_defaults::apply_schema_defaults;
