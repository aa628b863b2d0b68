use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{ClassDescriptor, ClassLoaderService};
use crate::error::{MockError, Result};

/// Registry of loadable classes.
///
/// Stores class descriptors with lookup by fully qualified name.
/// Provides thread-safe registration and retrieval so one registry can back
/// several unification passes.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    classes: RwLock<HashMap<String, Arc<ClassDescriptor>>>,
}

impl ClassRegistry {
    /// Creates a new empty class registry.
    pub fn new() -> Self {
        Self {
            classes: RwLock::new(HashMap::new()),
        }
    }

    /// Registers a class descriptor.
    ///
    /// # Arguments
    /// * `class` - Descriptor to register
    ///
    /// # Returns
    /// `Ok(())` if successful, `Err(MockError)` if the name is empty or already registered.
    pub fn register(&self, class: ClassDescriptor) -> Result<()> {
        if class.name.trim().is_empty() {
            return Err(MockError::InvalidMapping(
                "class descriptor without a name".to_string(),
            ));
        }

        let mut classes = self
            .classes
            .write()
            .map_err(|_| MockError::InvalidMapping("class registry lock poisoned".to_string()))?;

        if classes.contains_key(&class.name) {
            return Err(MockError::InvalidMapping(format!(
                "class '{}' already registered",
                class.name
            )));
        }

        classes.insert(class.name.clone(), Arc::new(class));
        Ok(())
    }

    /// Registers every descriptor, stopping at the first failure.
    pub fn register_all(&self, classes: impl IntoIterator<Item = ClassDescriptor>) -> Result<()> {
        for class in classes {
            self.register(class)?;
        }
        Ok(())
    }

    /// Retrieves a class descriptor by name.
    ///
    /// # Returns
    /// `Some(Arc<ClassDescriptor>)` if found, `None` otherwise.
    pub fn get(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        let classes = self.classes.read().ok()?;
        classes.get(name).cloned()
    }

    /// Checks if a class is registered.
    pub fn contains(&self, name: &str) -> bool {
        let classes = match self.classes.read() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        classes.contains_key(name)
    }

    /// Returns all registered class names, sorted.
    pub fn class_names(&self) -> Vec<String> {
        let classes = match self.classes.read() {
            Ok(guard) => guard,
            Err(_) => return Vec::new(),
        };
        let mut names: Vec<String> = classes.keys().cloned().collect();
        names.sort();
        names
    }

    /// Removes a class registration.
    ///
    /// # Returns
    /// `true` if the class was removed, `false` if it wasn't found.
    pub fn remove(&self, name: &str) -> bool {
        let mut classes = match self.classes.write() {
            Ok(guard) => guard,
            Err(_) => return false,
        };
        classes.remove(name).is_some()
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Whether no class is registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ClassLoaderService for ClassRegistry {
    fn load_class(&self, name: &str) -> Option<Arc<ClassDescriptor>> {
        self.get(name)
    }
}
