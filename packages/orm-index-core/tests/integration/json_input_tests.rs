//! Unification of documents and indexes read from JSON files.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

use orm_index_core::model::EntityMappings;
use orm_index_core::names::jpa;
use orm_index_core::{unify, AnnotationIndex, AnnotationTarget, ClassDescriptor};

use super::helpers::registry;

const DOCUMENT: &str = r#"{
    "package": "com.library",
    "access": "FIELD",
    "schema": "LIB",
    "sql-result-set-mappings": [
        { "name": "books", "entity-results": [{ "entity-class": "Book" }] }
    ],
    "entities": [
        {
            "class": "Book",
            "table": { "name": "BOOKS" },
            "attributes": {
                "ids": [{ "name": "isbn", "column": { "name": "ISBN", "length": 13 } }],
                "many-to-ones": [
                    {
                        "name": "author",
                        "target-entity": "Author",
                        "join-columns": [{ "name": "AUTHOR_ID" }],
                        "cascade": { "cascade-persist": true, "cascade-save-update": true }
                    }
                ],
                "element-collections": [
                    {
                        "name": "keywords",
                        "collection-table": { "name": "BOOK_KEYWORDS" }
                    }
                ]
            }
        }
    ]
}"#;

#[test]
fn test_unify_documents_from_files() {
    let dir = tempdir().unwrap();
    let document_path = dir.path().join("orm.json");
    fs::write(&document_path, DOCUMENT).unwrap();
    let index_path = dir.path().join("index.json");
    fs::write(&index_path, AnnotationIndex::new().to_json().unwrap()).unwrap();

    let document = EntityMappings::from_json(&fs::read_to_string(&document_path).unwrap()).unwrap();
    let index = AnnotationIndex::from_file(&index_path).unwrap();
    let loader = registry(vec![
        ClassDescriptor::new("com.library.Book")
            .with_field("isbn")
            .with_field("author")
            .with_field("keywords"),
        ClassDescriptor::new("com.library.Author"),
    ]);

    let merged = unify(index, vec![document], loader).unwrap();
    let book = merged.class("com.library.Book").unwrap();

    let table = book.class_annotation(jpa::TABLE).unwrap();
    assert_eq!(table.string_value("name"), Some("BOOKS"));
    assert_eq!(table.string_value("schema"), Some("LIB"));

    let collection_table = book.annotations_named(jpa::COLLECTION_TABLE).next().unwrap();
    assert_eq!(collection_table.string_value("schema"), Some("LIB"));

    let author = AnnotationTarget::field("com.library.Book", "author");
    let names: Vec<&str> = book
        .annotations
        .iter()
        .filter(|a| a.target.as_ref() == Some(&author))
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            jpa::MANY_TO_ONE,
            jpa::JOIN_COLUMN,
            orm_index_core::names::hibernate::CASCADE
        ]
    );

    let mappings = merged.annotations_named(jpa::SQL_RESULT_SET_MAPPINGS);
    assert_eq!(mappings.len(), 1);

    let round_trip = AnnotationIndex::from_json(&merged.to_json().unwrap()).unwrap();
    assert_eq!(round_trip, merged);
}
