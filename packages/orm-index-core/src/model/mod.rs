//! Typed mapping model produced by the XML deserialization layer.
//!
//! The model mirrors the `orm.xml` element structure. It derives serde
//! traits so tooling can load documents that were converted to JSON.

mod attributes;
mod columns;
mod document;
mod global;
mod managed;
mod types;

pub use attributes::{
    Attributes, Basic, CascadeType, ColumnOrFormula, ColumnTransformer, CustomGenerator,
    ElementCollection, EmbeddableAttributes, Embedded, EmbeddedId, GeneratedValue, Id, ManyToMany,
    ManyToOne, MapKeySpec, NaturalId, OneToMany, OneToOne, Param, PersistentAttribute, Transient,
    TypeSpec, Version,
};
pub use columns::{
    AssociationOverride, AttributeOverride, CollectionTable, Column, DiscriminatorColumn, Index,
    JoinColumn, JoinTable, OrderColumn, PrimaryKeyJoinColumn, SecondaryTable, Table,
    UniqueConstraint,
};
pub use document::{EntityMappings, PersistenceUnitDefaults, PersistenceUnitMetadata};
pub use global::{
    ColumnResult, EntityResult, FetchOverride, FetchProfile, FieldResult, FilterDef, FilterParam,
    NamedNativeQuery, NamedQuery, QueryHint, SequenceGenerator, SqlResultSetMapping,
    TableGenerator,
};
pub use managed::{
    Callbacks, Embeddable, Entity, EntityListener, EntityListeners, MappedSuperclass,
};
pub use types::{
    AccessType, DiscriminatorType, EnumType, FetchMode, FetchType, GenerationType,
    InheritanceType, LockModeType, MappingEnum, TemporalType,
};
