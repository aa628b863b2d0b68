//! Entity listeners and lifecycle callbacks.

use super::values::{class_array_value, qualify_class_name};
use super::AnnotationSink;
use crate::classes::resolve_method_target;
use crate::defaults::MappingDefault;
use crate::error::{MockError, Result};
use crate::index::{AnnotationTarget, IndexBuilder};
use crate::model::{Callbacks, EntityListeners};
use crate::names::{jpa, pseudo};

/// Annotation names for the seven lifecycle events, in declaration order.
pub type CallbackNames = [&'static str; 7];

/// Callback annotations of entities and their listeners.
pub const ENTITY_CALLBACKS: CallbackNames = [
    jpa::PRE_PERSIST,
    jpa::POST_PERSIST,
    jpa::PRE_REMOVE,
    jpa::POST_REMOVE,
    jpa::PRE_UPDATE,
    jpa::POST_UPDATE,
    jpa::POST_LOAD,
];

/// Callback markers of persistence-unit default listeners.
pub const DEFAULT_CALLBACKS: CallbackNames = [
    pseudo::DEFAULT_PRE_PERSIST,
    pseudo::DEFAULT_POST_PERSIST,
    pseudo::DEFAULT_PRE_REMOVE,
    pseudo::DEFAULT_POST_REMOVE,
    pseudo::DEFAULT_PRE_UPDATE,
    pseudo::DEFAULT_POST_UPDATE,
    pseudo::DEFAULT_POST_LOAD,
];

fn callback_methods(callbacks: &Callbacks) -> [Option<&str>; 7] {
    [
        callbacks.pre_persist.as_deref(),
        callbacks.post_persist.as_deref(),
        callbacks.pre_remove.as_deref(),
        callbacks.post_remove.as_deref(),
        callbacks.pre_update.as_deref(),
        callbacks.post_update.as_deref(),
        callbacks.post_load.as_deref(),
    ]
}

/// Emits one annotation per declared callback, targeting the method on `class`.
///
/// # Returns
/// The number of callback annotations emitted
pub fn mock_callbacks(
    builder: &mut IndexBuilder,
    class: &str,
    callbacks: &Callbacks,
    names: &CallbackNames,
) -> Result<usize> {
    let mut emitted = 0;
    for (name, method) in names.iter().zip(callback_methods(callbacks)) {
        let Some(method) = method.filter(|m| !m.is_empty()) else {
            continue;
        };
        let target = resolve_method_target(builder.class_loader(), class, method)?;
        builder.emit(name, Some(&target), Vec::new())?;
        emitted += 1;
    }
    Ok(emitted)
}

fn package_of(class: &str) -> Option<&str> {
    class.rsplit_once('.').map(|(package, _)| package)
}

/// `<entity-listeners>` of a managed type.
///
/// Listener classes without a package take the package of `class`. Each
/// listener gets its own class entry holding its callback annotations.
pub fn mock_entity_listeners(
    builder: &mut IndexBuilder,
    class: &str,
    listeners: &EntityListeners,
    defaults: &MappingDefault,
) -> Result<()> {
    if listeners.listeners.is_empty() {
        return Err(MockError::EmptyEntityListeners {
            class: class.to_string(),
        });
    }

    let package = package_of(class);
    let names: Vec<String> = listeners
        .listeners
        .iter()
        .map(|l| qualify_class_name(&l.class, package))
        .collect();
    let mut values = Vec::new();
    class_array_value("value", &names, None, builder.class_loader(), &mut values)?;
    builder.emit(jpa::ENTITY_LISTENERS, Some(&AnnotationTarget::class(class)), values)?;

    for (listener, name) in listeners.listeners.iter().zip(&names) {
        let emitted =
            mock_listener_class(builder, name, &listener.callbacks, &ENTITY_CALLBACKS, defaults)?;
        tracing::debug!("Mocked {} callbacks of listener {} for {}", emitted, name, class);
    }
    Ok(())
}

/// Creates the class entry of listener `name` and mocks its callbacks.
///
/// A listener already mocked with the same callback names is left as is
/// and reports zero callbacks.
pub fn mock_listener_class(
    builder: &mut IndexBuilder,
    name: &str,
    callbacks: &Callbacks,
    names: &CallbackNames,
    defaults: &MappingDefault,
) -> Result<usize> {
    builder.create_class_info(name)?;
    if !builder.mark_listener(name, names[0]) {
        tracing::debug!("Listener {} already mocked", name);
        return Ok(0);
    }
    let emitted = mock_callbacks(builder, name, callbacks, names)?;
    builder.finish_entity_object(name, defaults)?;
    Ok(emitted)
}
