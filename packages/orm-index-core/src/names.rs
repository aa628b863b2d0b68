//! Fully qualified names of the annotations and enum types the mockers emit.

/// JPA annotations and enums (`javax.persistence`).
pub mod jpa {
    pub const ACCESS: &str = "javax.persistence.Access";
    pub const ACCESS_TYPE: &str = "javax.persistence.AccessType";
    pub const ASSOCIATION_OVERRIDE: &str = "javax.persistence.AssociationOverride";
    pub const ASSOCIATION_OVERRIDES: &str = "javax.persistence.AssociationOverrides";
    pub const ATTRIBUTE_OVERRIDE: &str = "javax.persistence.AttributeOverride";
    pub const ATTRIBUTE_OVERRIDES: &str = "javax.persistence.AttributeOverrides";
    pub const BASIC: &str = "javax.persistence.Basic";
    pub const CACHEABLE: &str = "javax.persistence.Cacheable";
    pub const CASCADE_TYPE: &str = "javax.persistence.CascadeType";
    pub const COLLECTION_TABLE: &str = "javax.persistence.CollectionTable";
    pub const COLUMN: &str = "javax.persistence.Column";
    pub const COLUMN_RESULT: &str = "javax.persistence.ColumnResult";
    pub const DISCRIMINATOR_COLUMN: &str = "javax.persistence.DiscriminatorColumn";
    pub const DISCRIMINATOR_TYPE: &str = "javax.persistence.DiscriminatorType";
    pub const DISCRIMINATOR_VALUE: &str = "javax.persistence.DiscriminatorValue";
    pub const ELEMENT_COLLECTION: &str = "javax.persistence.ElementCollection";
    pub const EMBEDDABLE: &str = "javax.persistence.Embeddable";
    pub const EMBEDDED: &str = "javax.persistence.Embedded";
    pub const EMBEDDED_ID: &str = "javax.persistence.EmbeddedId";
    pub const ENTITY: &str = "javax.persistence.Entity";
    pub const ENTITY_LISTENERS: &str = "javax.persistence.EntityListeners";
    pub const ENTITY_RESULT: &str = "javax.persistence.EntityResult";
    pub const ENUM_TYPE: &str = "javax.persistence.EnumType";
    pub const ENUMERATED: &str = "javax.persistence.Enumerated";
    pub const EXCLUDE_DEFAULT_LISTENERS: &str = "javax.persistence.ExcludeDefaultListeners";
    pub const EXCLUDE_SUPERCLASS_LISTENERS: &str = "javax.persistence.ExcludeSuperclassListeners";
    pub const FETCH_TYPE: &str = "javax.persistence.FetchType";
    pub const FIELD_RESULT: &str = "javax.persistence.FieldResult";
    pub const GENERATED_VALUE: &str = "javax.persistence.GeneratedValue";
    pub const GENERATION_TYPE: &str = "javax.persistence.GenerationType";
    pub const ID: &str = "javax.persistence.Id";
    pub const ID_CLASS: &str = "javax.persistence.IdClass";
    pub const INDEX: &str = "javax.persistence.Index";
    pub const INHERITANCE: &str = "javax.persistence.Inheritance";
    pub const INHERITANCE_TYPE: &str = "javax.persistence.InheritanceType";
    pub const JOIN_COLUMN: &str = "javax.persistence.JoinColumn";
    pub const JOIN_COLUMNS: &str = "javax.persistence.JoinColumns";
    pub const JOIN_TABLE: &str = "javax.persistence.JoinTable";
    pub const LOB: &str = "javax.persistence.Lob";
    pub const LOCK_MODE_TYPE: &str = "javax.persistence.LockModeType";
    pub const MANY_TO_MANY: &str = "javax.persistence.ManyToMany";
    pub const MANY_TO_ONE: &str = "javax.persistence.ManyToOne";
    pub const MAP_KEY: &str = "javax.persistence.MapKey";
    pub const MAP_KEY_CLASS: &str = "javax.persistence.MapKeyClass";
    pub const MAP_KEY_COLUMN: &str = "javax.persistence.MapKeyColumn";
    pub const MAP_KEY_ENUMERATED: &str = "javax.persistence.MapKeyEnumerated";
    pub const MAP_KEY_JOIN_COLUMN: &str = "javax.persistence.MapKeyJoinColumn";
    pub const MAP_KEY_JOIN_COLUMNS: &str = "javax.persistence.MapKeyJoinColumns";
    pub const MAP_KEY_TEMPORAL: &str = "javax.persistence.MapKeyTemporal";
    pub const MAPPED_SUPERCLASS: &str = "javax.persistence.MappedSuperclass";
    pub const MAPS_ID: &str = "javax.persistence.MapsId";
    pub const NAMED_NATIVE_QUERIES: &str = "javax.persistence.NamedNativeQueries";
    pub const NAMED_NATIVE_QUERY: &str = "javax.persistence.NamedNativeQuery";
    pub const NAMED_QUERIES: &str = "javax.persistence.NamedQueries";
    pub const NAMED_QUERY: &str = "javax.persistence.NamedQuery";
    pub const ONE_TO_MANY: &str = "javax.persistence.OneToMany";
    pub const ONE_TO_ONE: &str = "javax.persistence.OneToOne";
    pub const ORDER_BY: &str = "javax.persistence.OrderBy";
    pub const ORDER_COLUMN: &str = "javax.persistence.OrderColumn";
    pub const POST_LOAD: &str = "javax.persistence.PostLoad";
    pub const POST_PERSIST: &str = "javax.persistence.PostPersist";
    pub const POST_REMOVE: &str = "javax.persistence.PostRemove";
    pub const POST_UPDATE: &str = "javax.persistence.PostUpdate";
    pub const PRE_PERSIST: &str = "javax.persistence.PrePersist";
    pub const PRE_REMOVE: &str = "javax.persistence.PreRemove";
    pub const PRE_UPDATE: &str = "javax.persistence.PreUpdate";
    pub const PRIMARY_KEY_JOIN_COLUMN: &str = "javax.persistence.PrimaryKeyJoinColumn";
    pub const PRIMARY_KEY_JOIN_COLUMNS: &str = "javax.persistence.PrimaryKeyJoinColumns";
    pub const QUERY_HINT: &str = "javax.persistence.QueryHint";
    pub const SECONDARY_TABLE: &str = "javax.persistence.SecondaryTable";
    pub const SECONDARY_TABLES: &str = "javax.persistence.SecondaryTables";
    pub const SEQUENCE_GENERATOR: &str = "javax.persistence.SequenceGenerator";
    pub const SQL_RESULT_SET_MAPPING: &str = "javax.persistence.SqlResultSetMapping";
    pub const SQL_RESULT_SET_MAPPINGS: &str = "javax.persistence.SqlResultSetMappings";
    pub const TABLE: &str = "javax.persistence.Table";
    pub const TABLE_GENERATOR: &str = "javax.persistence.TableGenerator";
    pub const TEMPORAL: &str = "javax.persistence.Temporal";
    pub const TEMPORAL_TYPE: &str = "javax.persistence.TemporalType";
    pub const TRANSIENT: &str = "javax.persistence.Transient";
    pub const UNIQUE_CONSTRAINT: &str = "javax.persistence.UniqueConstraint";
    pub const VERSION: &str = "javax.persistence.Version";
}

/// Hibernate extension annotations and enums (`org.hibernate.annotations`).
pub mod hibernate {
    pub const ATTRIBUTE_ACCESSOR: &str = "org.hibernate.annotations.AttributeAccessor";
    pub const CASCADE: &str = "org.hibernate.annotations.Cascade";
    pub const CASCADE_TYPE: &str = "org.hibernate.annotations.CascadeType";
    pub const COLLECTION_TYPE: &str = "org.hibernate.annotations.CollectionType";
    pub const COLUMN_TRANSFORMER: &str = "org.hibernate.annotations.ColumnTransformer";
    pub const COLUMN_TRANSFORMERS: &str = "org.hibernate.annotations.ColumnTransformers";
    pub const COLUMNS: &str = "org.hibernate.annotations.Columns";
    pub const FETCH_MODE: &str = "org.hibernate.annotations.FetchMode";
    pub const FETCH_OVERRIDE: &str = "org.hibernate.annotations.FetchProfile$FetchOverride";
    pub const FETCH_PROFILE: &str = "org.hibernate.annotations.FetchProfile";
    pub const FETCH_PROFILES: &str = "org.hibernate.annotations.FetchProfiles";
    pub const FILTER_DEF: &str = "org.hibernate.annotations.FilterDef";
    pub const FILTER_DEFS: &str = "org.hibernate.annotations.FilterDefs";
    pub const FORMULA: &str = "org.hibernate.annotations.Formula";
    pub const GENERIC_GENERATOR: &str = "org.hibernate.annotations.GenericGenerator";
    pub const NATURAL_ID: &str = "org.hibernate.annotations.NaturalId";
    pub const PARAM_DEF: &str = "org.hibernate.annotations.ParamDef";
    pub const PARAMETER: &str = "org.hibernate.annotations.Parameter";
    pub const SEQUENCE_GENERATORS: &str = "org.hibernate.annotations.SequenceGenerators";
    pub const TABLE_GENERATORS: &str = "org.hibernate.annotations.TableGenerators";
    pub const TYPE: &str = "org.hibernate.annotations.Type";
}

/// Markers for persistence-unit level defaults that have no real annotation.
pub mod pseudo {
    pub const DEFAULT_ACCESS: &str = "org.hibernate.annotations.xml.pseudo.DefaultAccess";
    pub const DEFAULT_DELIMITED_IDENTIFIERS: &str =
        "org.hibernate.annotations.xml.pseudo.DefaultDelimitedIdentifiers";
    pub const DEFAULT_ENTITY_LISTENERS: &str =
        "org.hibernate.annotations.xml.pseudo.DefaultEntityListeners";
    pub const DEFAULT_POST_LOAD: &str = "org.hibernate.annotations.xml.pseudo.DefaultPostLoad";
    pub const DEFAULT_POST_PERSIST: &str =
        "org.hibernate.annotations.xml.pseudo.DefaultPostPersist";
    pub const DEFAULT_POST_REMOVE: &str = "org.hibernate.annotations.xml.pseudo.DefaultPostRemove";
    pub const DEFAULT_POST_UPDATE: &str = "org.hibernate.annotations.xml.pseudo.DefaultPostUpdate";
    pub const DEFAULT_PRE_PERSIST: &str = "org.hibernate.annotations.xml.pseudo.DefaultPrePersist";
    pub const DEFAULT_PRE_REMOVE: &str = "org.hibernate.annotations.xml.pseudo.DefaultPreRemove";
    pub const DEFAULT_PRE_UPDATE: &str = "org.hibernate.annotations.xml.pseudo.DefaultPreUpdate";
}

/// Implementation types behind the abbreviated `<collection-type>` keywords.
pub mod collection_types {
    pub const SET: &str = "org.hibernate.type.SetType";
    pub const BAG: &str = "org.hibernate.type.BagType";
    pub const LIST: &str = "org.hibernate.type.ListType";
    pub const MAP: &str = "org.hibernate.type.MapType";
    pub const ARRAY: &str = "org.hibernate.type.ArrayType";
}
