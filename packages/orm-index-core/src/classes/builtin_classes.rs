use super::class_registry::ClassRegistry;
use super::ClassDescriptor;
use crate::error::Result;

// Types commonly referenced from mappings (target classes, map keys,
// result classes) that are never part of an application's own model.
const JAVA_LANG: &[&str] = &[
    "Object", "String", "Boolean", "Byte", "Character", "Short", "Integer", "Long", "Float",
    "Double", "Number",
];

const JAVA_MATH: &[&str] = &["BigDecimal", "BigInteger"];

const JAVA_UTIL: &[&str] = &[
    "Collection", "List", "Set", "SortedSet", "Map", "SortedMap", "Date", "Calendar", "UUID",
    "Locale", "Currency",
];

const JAVA_SQL: &[&str] = &["Date", "Time", "Timestamp", "Blob", "Clob"];

const JAVA_TIME: &[&str] = &[
    "Instant", "LocalDate", "LocalDateTime", "LocalTime", "OffsetDateTime", "ZonedDateTime",
    "Duration",
];

/// Registers the JDK classes mappings commonly reference.
///
/// `java.lang.Object` is the root; every other builtin extends it except
/// where the JDK hierarchy says otherwise (`java.lang.Number` subclasses).
///
/// # Arguments
/// * `registry` - Class registry to register builtin classes into
///
/// # Returns
/// `Ok(())` if successful, `Err(MockError)` if any class was already registered.
pub fn register_builtin_classes(registry: &ClassRegistry) -> Result<()> {
    registry.register(ClassDescriptor::new("java.lang.Object"))?;

    for simple in JAVA_LANG.iter().filter(|s| **s != "Object") {
        let super_name = match *simple {
            "Byte" | "Short" | "Integer" | "Long" | "Float" | "Double" => "java.lang.Number",
            _ => "java.lang.Object",
        };
        registry.register(ClassDescriptor::new(format!("java.lang.{}", simple)).extends(super_name))?;
    }

    let packages: [(&str, &[&str]); 4] = [
        ("java.math", JAVA_MATH),
        ("java.util", JAVA_UTIL),
        ("java.sql", JAVA_SQL),
        ("java.time", JAVA_TIME),
    ];
    for (package, simple_names) in packages {
        for simple in simple_names {
            let super_name = match (package, *simple) {
                ("java.math", _) => "java.lang.Number",
                ("java.sql", "Date" | "Time" | "Timestamp") => "java.util.Date",
                _ => "java.lang.Object",
            };
            registry.register(
                ClassDescriptor::new(format!("{}.{}", package, simple)).extends(super_name),
            )?;
        }
    }

    tracing::debug!("Registered {} builtin classes", registry.len());
    Ok(())
}
