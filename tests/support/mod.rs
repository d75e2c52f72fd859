//! Shared helpers for command tests.
//!
//! Provides valid and invalid field values in both raw and prefixed form,
//! edit descriptors, and assertions that run a command against a model.

#![allow(dead_code)]

pub mod fixtures;

use sellah::commands::{Command, EditClientDescriptor, Index};
use sellah::domain::{Address, Email, Name, PhoneNumber};
use sellah::matching::NameContainsKeywordsPredicate;
use sellah::Model;

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_NUMBER_AMY: &str = "11111111";
pub const VALID_PHONE_NUMBER_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";

pub const VALID_NAME_CANNON: &str = "Cannon";
pub const VALID_NAME_DAISY: &str = "Daisy";
pub const VALID_UNIT_PRICE_CANNON: &str = "1";
pub const VALID_UNIT_PRICE_DAISY: &str = "4.56";

pub const NAME_DESC_AMY: &str = " n/Amy Bee";
pub const NAME_DESC_BOB: &str = " n/Bob Choo";
pub const PHONE_NUMBER_DESC_AMY: &str = " p/11111111";
pub const PHONE_NUMBER_DESC_BOB: &str = " p/22222222";
pub const EMAIL_DESC_AMY: &str = " e/amy@example.com";
pub const EMAIL_DESC_BOB: &str = " e/bob@example.com";
pub const ADDRESS_DESC_AMY: &str = " a/Block 312, Amy Street 1";
pub const ADDRESS_DESC_BOB: &str = " a/Block 123, Bobby Street 3";

pub const NAME_DESC_CANNON: &str = " n/Cannon";
pub const NAME_DESC_DAISY: &str = " n/Daisy";
pub const UNIT_PRICE_DESC_CANNON: &str = " u/1";
pub const UNIT_PRICE_DESC_DAISY: &str = " u/4.56";

// '&' not allowed in names
pub const INVALID_NAME_DESC: &str = " n/James&";
// 'a' not allowed in phone numbers
pub const INVALID_PHONE_NUMBER_DESC: &str = " p/911a";
// missing '@' symbol
pub const INVALID_EMAIL_DESC: &str = " e/bob!yahoo";
// empty string not allowed for addresses
pub const INVALID_ADDRESS_DESC: &str = " a/";
// letters not allowed in unit prices
pub const INVALID_UNIT_PRICE_DESC: &str = " u/2s";

pub const PREAMBLE_WHITESPACE: &str = "\t  \r  \n";
pub const PREAMBLE_NON_EMPTY: &str = "NonEmptyPreamble";

/// Descriptor that edits every field to Amy's values.
pub fn desc_amy() -> EditClientDescriptor {
    EditClientDescriptor {
        name: Some(Name::new(VALID_NAME_AMY).unwrap()),
        phone_number: Some(PhoneNumber::new(VALID_PHONE_NUMBER_AMY).unwrap()),
        email: Some(Email::new(VALID_EMAIL_AMY).unwrap()),
        address: Some(Address::new(VALID_ADDRESS_AMY).unwrap()),
    }
}

/// Descriptor that edits every field to Bob's values.
pub fn desc_bob() -> EditClientDescriptor {
    EditClientDescriptor {
        name: Some(Name::new(VALID_NAME_BOB).unwrap()),
        phone_number: Some(PhoneNumber::new(VALID_PHONE_NUMBER_BOB).unwrap()),
        email: Some(Email::new(VALID_EMAIL_BOB).unwrap()),
        address: Some(Address::new(VALID_ADDRESS_BOB).unwrap()),
    }
}

/// Execute `command` and check that it succeeds with `expected_message`
/// and leaves `actual_model` equal to `expected_model`.
pub fn assert_command_success(
    command: &dyn Command,
    actual_model: &mut Model,
    expected_message: &str,
    expected_model: &Model,
) {
    match command.execute(actual_model) {
        Ok(result) => {
            assert_eq!(result.feedback_to_user(), expected_message);
            assert_eq!(actual_model, expected_model);
        }
        Err(e) => panic!("Execution of command should not fail: {e}"),
    }
}

/// Execute `command` and check that it fails with `expected_message`.
///
/// The address book, and every filtered list, must be unchanged.
pub fn assert_command_failure(
    command: &dyn Command,
    actual_model: &mut Model,
    expected_message: &str,
) {
    let expected_model = actual_model.clone();
    let expected_clients: Vec<_> = actual_model
        .filtered_client_list()
        .into_iter()
        .cloned()
        .collect();

    match command.execute(actual_model) {
        Ok(result) => panic!(
            "Command should fail, but succeeded with: {}",
            result.feedback_to_user()
        ),
        Err(e) => assert_eq!(e.to_string(), expected_message),
    }

    assert_eq!(actual_model.address_book(), expected_model.address_book());
    let actual_clients: Vec<_> = actual_model
        .filtered_client_list()
        .into_iter()
        .cloned()
        .collect();
    assert_eq!(actual_clients, expected_clients);
    assert_eq!(*actual_model, expected_model);
}

/// Filter `model` so that only the client at `index` is shown.
pub fn show_client_at_index(model: &mut Model, index: Index) {
    let shown = model.filtered_client_list();
    assert!(index.zero_based() < shown.len());

    let first_word = shown[index.zero_based()]
        .name()
        .as_str()
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string();
    model.update_filtered_client_list(NameContainsKeywordsPredicate::new([first_word]));

    assert_eq!(model.filtered_client_list().len(), 1);
}
