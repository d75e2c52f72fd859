//! Tests for loading and saving the address book document.

mod support;

use sellah::error::{IllegalValueError, StorageError};
use sellah::storage::{JsonAdaptedClient, JsonSerializableAddressBook};
use sellah::{AddressBook, AddressBookStorage, JsonAddressBookStorage};
use std::fs;
use std::path::Path;
use support::fixtures::*;
use tempfile::tempdir;

fn write_file(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

#[test]
fn test_round_trip_through_file() {
    let dir = tempdir().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("nested").join("book.json"));

    let original = typical_address_book();
    storage.save_address_book(&original).unwrap();
    let loaded = storage.read_address_book().unwrap().unwrap();
    assert_eq!(loaded, original);

    // overwrite with a modified book
    let mut modified = original.clone();
    modified.add_client(amy()).unwrap();
    modified.remove_product(&eraser()).unwrap();
    storage.save_address_book(&modified).unwrap();
    assert_eq!(storage.read_address_book().unwrap().unwrap(), modified);
}

#[test]
fn test_missing_file_reads_as_none() {
    let dir = tempdir().unwrap();
    let storage = JsonAddressBookStorage::new(dir.path().join("absent.json"));
    assert!(storage.read_address_book().unwrap().is_none());
}

#[test]
fn test_not_json_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    write_file(&path, "not json format!");

    let err = JsonAddressBookStorage::new(&path).read_address_book().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)), "{err:?}");
}

#[test]
fn test_missing_persons_list_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    write_file(&path, r#"{ "clients": [], "products": [] }"#);

    let err = JsonAddressBookStorage::new(&path).read_address_book().unwrap_err();
    assert!(matches!(err, StorageError::Json(_)), "{err:?}");
}

#[test]
fn test_invalid_client_fails_with_constraint_message() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    write_file(
        &path,
        r#"{
            "persons": [],
            "clients": [
                { "name": "Amy Bee", "id": "c-1", "phone number": "11111111",
                  "address": "Block 312", "email": "bob!yahoo" }
            ]
        }"#,
    );

    let err = JsonAddressBookStorage::new(&path).read_address_book().unwrap_err();
    match &err {
        StorageError::IllegalValue(IllegalValueError::InvalidField(_)) => {}
        other => panic!("Expected invalid field, got: {other:?}"),
    }
    assert!(err.to_string().starts_with("Emails should be of the format"));
}

#[test]
fn test_missing_product_field_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    write_file(
        &path,
        r#"{ "persons": [], "products": [ { "name": "Cannon", "id": "p-1" } ] }"#,
    );

    let err = JsonAddressBookStorage::new(&path).read_address_book().unwrap_err();
    assert_eq!(err.to_string(), "Product's UnitPrice field is missing!");
}

#[test]
fn test_duplicate_clients_fail() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    let client = serde_json::to_value(JsonAdaptedClient::from(&alice())).unwrap();
    let document = serde_json::json!({
        "persons": [],
        "clients": [client.clone(), client],
        "products": null,
    });
    write_file(&path, &document.to_string());

    let err = JsonAddressBookStorage::new(&path).read_address_book().unwrap_err();
    assert_eq!(err.to_string(), "Clients list contains duplicate client(s).");
}

#[test]
fn test_saved_document_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("book.json");
    let mut book = AddressBook::new();
    book.add_client(alice()).unwrap();
    book.add_product(daisy()).unwrap();
    JsonAddressBookStorage::new(&path).save_address_book(&book).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["persons"], serde_json::json!([]));
    assert_eq!(value["clients"][0]["phone number"], "94351253");
    assert_eq!(value["clients"][0]["id"], "c-alice");
    assert_eq!(value["products"][0]["unit price"], "4.56");
    assert_eq!(value["products"][0]["name"], "Daisy");
}

#[test]
fn test_product_order_is_preserved() {
    let mut book = AddressBook::new();
    book.add_product(daisy()).unwrap();
    book.add_product(cannon()).unwrap();

    let restored = JsonSerializableAddressBook::from(&book).to_model_type().unwrap();
    assert_eq!(restored.products(), &[daisy(), cannon()]);
}
