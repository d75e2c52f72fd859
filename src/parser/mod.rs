//! Turns a line of user input into a [`Command`].

pub mod argument_tokenizer;
pub mod cli_syntax;

pub use argument_tokenizer::{tokenize, ArgumentMultimap};
pub use cli_syntax::{
    Prefix, PREFIX_ADDRESS, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE_NUMBER, PREFIX_UNIT_PRICE,
};

use crate::commands::{
    AddClientCommand, AddProductCommand, ClearCommand, Command, DeleteClientCommand,
    DeleteProductCommand, EditClientCommand, EditClientDescriptor, ExitCommand,
    FindClientCommand, FindProductCommand, HelpCommand, Index, ListCommand,
};
use crate::domain::{Address, Email, Id, Name, PhoneNumber, UnitPrice};
use crate::error::{ParseError, ParseResult};
use crate::matching::NameContainsKeywordsPredicate;
use crate::models::{Client, Product};

/// Parses user input into commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressBookParser;

impl AddressBookParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one line of input.
    ///
    /// # Errors
    ///
    /// `InvalidFormat` for blank input or malformed arguments,
    /// `UnknownCommand` for an unrecognised command word, and
    /// `InvalidValue` when a field value breaks its format rule.
    pub fn parse_command(&self, user_input: &str) -> ParseResult<Box<dyn Command>> {
        let trimmed = user_input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::InvalidFormat(
                HelpCommand::MESSAGE_USAGE.to_string(),
            ));
        }

        let (command_word, arguments) = match trimmed.find(char::is_whitespace) {
            Some(split) => trimmed.split_at(split),
            None => (trimmed, ""),
        };

        tracing::debug!(command_word, "Parsing command");

        match command_word {
            AddClientCommand::COMMAND_WORD => parse_add_client(arguments),
            EditClientCommand::COMMAND_WORD => parse_edit_client(arguments),
            DeleteClientCommand::COMMAND_WORD => {
                let index = parse_index(arguments).map_err(|_| {
                    ParseError::InvalidFormat(DeleteClientCommand::MESSAGE_USAGE.to_string())
                })?;
                Ok(Box::new(DeleteClientCommand::new(index)))
            }
            FindClientCommand::COMMAND_WORD => {
                let predicate = parse_keywords(arguments, FindClientCommand::MESSAGE_USAGE)?;
                Ok(Box::new(FindClientCommand::new(predicate)))
            }
            AddProductCommand::COMMAND_WORD => parse_add_product(arguments),
            DeleteProductCommand::COMMAND_WORD => {
                let index = parse_index(arguments).map_err(|_| {
                    ParseError::InvalidFormat(DeleteProductCommand::MESSAGE_USAGE.to_string())
                })?;
                Ok(Box::new(DeleteProductCommand::new(index)))
            }
            FindProductCommand::COMMAND_WORD => {
                let predicate = parse_keywords(arguments, FindProductCommand::MESSAGE_USAGE)?;
                Ok(Box::new(FindProductCommand::new(predicate)))
            }
            ListCommand::COMMAND_WORD => Ok(Box::new(ListCommand)),
            ClearCommand::COMMAND_WORD => Ok(Box::new(ClearCommand)),
            ExitCommand::COMMAND_WORD => Ok(Box::new(ExitCommand)),
            HelpCommand::COMMAND_WORD => Ok(Box::new(HelpCommand)),
            _ => Err(ParseError::UnknownCommand),
        }
    }
}

/// Parse a one-based index, rejecting zero, signs and non-digits.
pub fn parse_index(one_based_index: &str) -> ParseResult<Index> {
    let trimmed = one_based_index.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

fn parse_keywords(arguments: &str, usage: &str) -> ParseResult<NameContainsKeywordsPredicate> {
    let trimmed = arguments.trim();
    if trimmed.is_empty() {
        return Err(ParseError::InvalidFormat(usage.to_string()));
    }
    Ok(NameContainsKeywordsPredicate::new(trimmed.split_whitespace()))
}

fn parse_add_client(arguments: &str) -> ParseResult<Box<dyn Command>> {
    let required = [PREFIX_NAME, PREFIX_PHONE_NUMBER, PREFIX_EMAIL, PREFIX_ADDRESS];
    let map = tokenize(arguments, &required);
    let (Some(name), Some(phone), Some(email), Some(address)) = (
        map.value(PREFIX_NAME),
        map.value(PREFIX_PHONE_NUMBER),
        map.value(PREFIX_EMAIL),
        map.value(PREFIX_ADDRESS),
    ) else {
        return Err(ParseError::InvalidFormat(AddClientCommand::MESSAGE_USAGE.to_string()));
    };
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(AddClientCommand::MESSAGE_USAGE.to_string()));
    }

    let client = Client::new(
        Id::generate(),
        Name::new(name)?,
        PhoneNumber::new(phone)?,
        Email::new(email)?,
        Address::new(address)?,
    );
    Ok(Box::new(AddClientCommand::new(client)))
}

fn parse_edit_client(arguments: &str) -> ParseResult<Box<dyn Command>> {
    let map = tokenize(
        arguments,
        &[PREFIX_NAME, PREFIX_PHONE_NUMBER, PREFIX_EMAIL, PREFIX_ADDRESS],
    );
    let index = parse_index(map.preamble())
        .map_err(|_| ParseError::InvalidFormat(EditClientCommand::MESSAGE_USAGE.to_string()))?;

    let descriptor = EditClientDescriptor {
        name: map.value(PREFIX_NAME).map(Name::new).transpose()?,
        phone_number: map.value(PREFIX_PHONE_NUMBER).map(PhoneNumber::new).transpose()?,
        email: map.value(PREFIX_EMAIL).map(Email::new).transpose()?,
        address: map.value(PREFIX_ADDRESS).map(Address::new).transpose()?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NoFieldsEdited);
    }

    Ok(Box::new(EditClientCommand::new(index, descriptor)))
}

fn parse_add_product(arguments: &str) -> ParseResult<Box<dyn Command>> {
    let map = tokenize(arguments, &[PREFIX_NAME, PREFIX_UNIT_PRICE]);
    let (Some(name), Some(unit_price)) = (map.value(PREFIX_NAME), map.value(PREFIX_UNIT_PRICE))
    else {
        return Err(ParseError::InvalidFormat(AddProductCommand::MESSAGE_USAGE.to_string()));
    };
    if !map.preamble().is_empty() {
        return Err(ParseError::InvalidFormat(AddProductCommand::MESSAGE_USAGE.to_string()));
    }

    let product = Product::new(Id::generate(), Name::new(name)?, UnitPrice::new(unit_price)?);
    Ok(Box::new(AddProductCommand::new(product)))
}
