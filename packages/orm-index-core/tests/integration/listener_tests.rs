//! Entity listeners and lifecycle callbacks.

use ntest::timeout;
use pretty_assertions::assert_eq;

use orm_index_core::model::{
    Callbacks, Entity, EntityListener, EntityListeners, EntityMappings, PersistenceUnitDefaults,
    PersistenceUnitMetadata,
};
use orm_index_core::names::{jpa, pseudo};
use orm_index_core::{unify, AnnotationIndex, AnnotationTarget, ClassDescriptor, MockError, Value};

use super::helpers::registry;

const CALLBACK_METHODS: [&str; 7] = [
    "prePersist",
    "postPersist",
    "preRemove",
    "postRemove",
    "preUpdate",
    "postUpdate",
    "postLoad",
];

fn all_callbacks() -> Callbacks {
    Callbacks {
        pre_persist: Some(CALLBACK_METHODS[0].to_string()),
        post_persist: Some(CALLBACK_METHODS[1].to_string()),
        pre_remove: Some(CALLBACK_METHODS[2].to_string()),
        post_remove: Some(CALLBACK_METHODS[3].to_string()),
        pre_update: Some(CALLBACK_METHODS[4].to_string()),
        post_update: Some(CALLBACK_METHODS[5].to_string()),
        post_load: Some(CALLBACK_METHODS[6].to_string()),
    }
}

fn listener_class(name: &str) -> ClassDescriptor {
    CALLBACK_METHODS
        .iter()
        .fold(ClassDescriptor::new(name), |class, method| class.with_method(*method, 1))
}

fn document(listeners: Option<EntityListeners>) -> EntityMappings {
    EntityMappings {
        package: Some("com.shop".to_string()),
        entities: vec![Entity {
            class: "Order".to_string(),
            entity_listeners: listeners,
            ..Default::default()
        }],
        ..Default::default()
    }
}

#[timeout(5000)]
#[test]
fn test_listener_callbacks_target_listener_methods() {
    let loader = registry(vec![
        ClassDescriptor::new("com.shop.Order"),
        listener_class("com.shop.AuditListener"),
    ]);
    let listeners = EntityListeners {
        listeners: vec![EntityListener {
            class: "AuditListener".to_string(),
            callbacks: all_callbacks(),
        }],
    };

    let index = unify(AnnotationIndex::new(), vec![document(Some(listeners))], loader).unwrap();

    let order = index.class("com.shop.Order").unwrap();
    let registered = order.class_annotation(jpa::ENTITY_LISTENERS).unwrap();
    assert_eq!(
        registered.value("value"),
        Some(&Value::Array(vec![Value::Class("com.shop.AuditListener".to_string())]))
    );

    let callbacks = index.annotations("com.shop.AuditListener");
    assert_eq!(callbacks.len(), 7);
    for (annotation, method) in callbacks.iter().zip(CALLBACK_METHODS) {
        assert_eq!(
            annotation.target,
            Some(AnnotationTarget::method("com.shop.AuditListener", method))
        );
    }
    let names: Vec<&str> = callbacks.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            jpa::PRE_PERSIST,
            jpa::POST_PERSIST,
            jpa::PRE_REMOVE,
            jpa::POST_REMOVE,
            jpa::PRE_UPDATE,
            jpa::POST_UPDATE,
            jpa::POST_LOAD
        ]
    );
}

#[timeout(5000)]
#[test]
fn test_shared_listener_callbacks_are_mocked_once() {
    let loader = registry(vec![
        ClassDescriptor::new("com.shop.Order"),
        ClassDescriptor::new("com.shop.Invoice"),
        listener_class("com.shop.AuditListener"),
    ]);
    let listeners = || {
        Some(EntityListeners {
            listeners: vec![EntityListener {
                class: "AuditListener".to_string(),
                callbacks: all_callbacks(),
            }],
        })
    };
    let mut mappings = document(listeners());
    mappings.entities.push(Entity {
        class: "Invoice".to_string(),
        entity_listeners: listeners(),
        ..Default::default()
    });

    let index = unify(AnnotationIndex::new(), vec![mappings], loader).unwrap();

    assert_eq!(index.annotations("com.shop.AuditListener").len(), 7);
    for entity in ["com.shop.Order", "com.shop.Invoice"] {
        let class = index.class(entity).unwrap();
        assert!(class.class_annotation(jpa::ENTITY_LISTENERS).is_some());
    }
}

#[test]
fn test_empty_entity_listeners_are_fatal() {
    let loader = registry(vec![ClassDescriptor::new("com.shop.Order")]);
    let err = unify(
        AnnotationIndex::new(),
        vec![document(Some(EntityListeners::default()))],
        loader,
    )
    .unwrap_err();
    assert!(matches!(err, MockError::EmptyEntityListeners { class } if class == "com.shop.Order"));
}

#[test]
fn test_entity_own_callbacks() {
    let loader = registry(vec![listener_class("com.shop.Order")]);
    let mut mappings = document(None);
    mappings.entities[0].callbacks = Callbacks {
        post_load: Some("postLoad".to_string()),
        ..Default::default()
    };
    let index = unify(AnnotationIndex::new(), vec![mappings], loader).unwrap();
    let post_load = index.annotations_named(jpa::POST_LOAD);
    assert_eq!(post_load.len(), 1);
    assert_eq!(
        post_load[0].target,
        Some(AnnotationTarget::method("com.shop.Order", "postLoad"))
    );
}

#[test]
fn test_default_listeners_use_pseudo_annotations() {
    let loader = registry(vec![
        ClassDescriptor::new("com.shop.Order"),
        listener_class("com.shop.GlobalListener"),
    ]);
    let mut mappings = document(None);
    mappings.persistence_unit_metadata = Some(PersistenceUnitMetadata {
        xml_mapping_metadata_complete: false,
        persistence_unit_defaults: Some(PersistenceUnitDefaults {
            delimited_identifiers: true,
            entity_listeners: Some(EntityListeners {
                listeners: vec![EntityListener {
                    class: "com.shop.GlobalListener".to_string(),
                    callbacks: Callbacks {
                        pre_update: Some("preUpdate".to_string()),
                        ..Default::default()
                    },
                }],
            }),
            ..Default::default()
        }),
    });

    let index = unify(AnnotationIndex::new(), vec![mappings], loader).unwrap();
    let globals: Vec<&str> = index.global_annotations().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        globals,
        vec![pseudo::DEFAULT_DELIMITED_IDENTIFIERS, pseudo::DEFAULT_ENTITY_LISTENERS]
    );
    let callbacks = index.annotations("com.shop.GlobalListener");
    assert_eq!(callbacks.len(), 1);
    assert_eq!(callbacks[0].name, pseudo::DEFAULT_PRE_UPDATE);
}
