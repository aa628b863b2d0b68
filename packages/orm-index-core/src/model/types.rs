//! Enumerated values of the mapping vocabulary.
//!
//! Each enum knows the Java enum type it is emitted as and the constant
//! name used inside a synthetic annotation.

use serde::{Deserialize, Serialize};

use crate::names::{hibernate, jpa};

/// An enum that is emitted as a Java enum constant.
pub trait MappingEnum: Copy {
    /// Fully qualified name of the Java enum type.
    const TYPE_NAME: &'static str;

    /// Constant name within the Java enum type.
    fn constant(&self) -> &'static str;
}

macro_rules! mapping_enum {
    ($(#[$meta:meta])* $name:ident => $type_name:path { $($variant:ident => $constant:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        pub enum $name {
            $($variant),+
        }

        impl MappingEnum for $name {
            const TYPE_NAME: &'static str = $type_name;

            fn constant(&self) -> &'static str {
                match self {
                    $(Self::$variant => $constant),+
                }
            }
        }
    };
}

mapping_enum! {
    /// Whether a persistent attribute is read through its field or its getter.
    AccessType => jpa::ACCESS_TYPE { Field => "FIELD", Property => "PROPERTY" }
}

mapping_enum! {
    /// Eager or lazy association/basic fetching.
    FetchType => jpa::FETCH_TYPE { Lazy => "LAZY", Eager => "EAGER" }
}

mapping_enum! {
    /// Storage of enum-valued attributes.
    EnumType => jpa::ENUM_TYPE { Ordinal => "ORDINAL", String => "STRING" }
}

mapping_enum! {
    /// Temporal precision of date-valued attributes.
    TemporalType => jpa::TEMPORAL_TYPE { Date => "DATE", Time => "TIME", Timestamp => "TIMESTAMP" }
}

mapping_enum! {
    /// Identifier generation strategy.
    GenerationType => jpa::GENERATION_TYPE {
        Table => "TABLE",
        Sequence => "SEQUENCE",
        Identity => "IDENTITY",
        Auto => "AUTO",
    }
}

mapping_enum! {
    /// Inheritance mapping strategy.
    InheritanceType => jpa::INHERITANCE_TYPE {
        SingleTable => "SINGLE_TABLE",
        Joined => "JOINED",
        TablePerClass => "TABLE_PER_CLASS",
    }
}

mapping_enum! {
    /// Discriminator column type.
    DiscriminatorType => jpa::DISCRIMINATOR_TYPE { String => "STRING", Char => "CHAR", Integer => "INTEGER" }
}

mapping_enum! {
    /// Lock mode of a named query.
    LockModeType => jpa::LOCK_MODE_TYPE {
        Read => "READ",
        Write => "WRITE",
        Optimistic => "OPTIMISTIC",
        OptimisticForceIncrement => "OPTIMISTIC_FORCE_INCREMENT",
        PessimisticRead => "PESSIMISTIC_READ",
        PessimisticWrite => "PESSIMISTIC_WRITE",
        PessimisticForceIncrement => "PESSIMISTIC_FORCE_INCREMENT",
        None => "NONE",
    }
}

mapping_enum! {
    /// Fetch mode of a fetch-profile override.
    FetchMode => hibernate::FETCH_MODE { Select => "SELECT", Join => "JOIN", Subselect => "SUBSELECT" }
}

impl AccessType {
    /// Parses a legacy access name leniently (case-insensitive, trimmed).
    pub fn parse_lenient(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "FIELD" => Some(Self::Field),
            "PROPERTY" => Some(Self::Property),
            _ => None,
        }
    }
}

impl GenerationType {
    /// Hibernate generator strategy backing a declared generation type.
    pub fn generator_strategy(&self) -> &'static str {
        match self {
            Self::Table => "enhanced-table",
            Self::Sequence => "enhanced-sequence",
            Self::Identity => "identity",
            Self::Auto => "native",
        }
    }
}
