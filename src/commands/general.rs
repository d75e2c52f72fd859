//! Commands that act on the whole address book or the application.

use super::{
    AddClientCommand, AddProductCommand, Command, CommandResult, DeleteClientCommand,
    DeleteProductCommand, EditClientCommand, FindClientCommand, FindProductCommand,
};
use crate::address_book::AddressBook;
use crate::error::CommandOutcome;
use crate::model::Model;

/// Shows every record again after a find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    pub const COMMAND_WORD: &'static str = "list";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all records";
}

impl Command for ListCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.show_all();
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }

    fn mutates(&self) -> bool {
        false
    }
}

/// Empties the address book.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearCommand;

impl ClearCommand {
    pub const COMMAND_WORD: &'static str = "clear";
    pub const MESSAGE_SUCCESS: &'static str = "Address book has been cleared!";
}

impl Command for ClearCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.set_address_book(&AddressBook::new());
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

/// Stops the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const COMMAND_WORD: &'static str = "exit";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str = "Exiting Sellah as requested ...";
}

impl Command for ExitCommand {
    fn execute(&self, _model: &mut Model) -> CommandOutcome<CommandResult> {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }

    fn mutates(&self) -> bool {
        false
    }
}

/// Lists the usage of every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const COMMAND_WORD: &'static str = "help";
    pub const MESSAGE_USAGE: &'static str =
        "help: Shows program usage instructions.\nExample: help";

    pub fn usage_text() -> String {
        [
            AddClientCommand::MESSAGE_USAGE,
            EditClientCommand::MESSAGE_USAGE,
            DeleteClientCommand::MESSAGE_USAGE,
            FindClientCommand::MESSAGE_USAGE,
            AddProductCommand::MESSAGE_USAGE,
            DeleteProductCommand::MESSAGE_USAGE,
            FindProductCommand::MESSAGE_USAGE,
            "list: Shows all records.",
            "clear: Deletes all records.",
            "exit: Exits the program.",
        ]
        .join("\n\n")
    }
}

impl Command for HelpCommand {
    fn execute(&self, _model: &mut Model) -> CommandOutcome<CommandResult> {
        Ok(CommandResult::new(Self::usage_text()))
    }

    fn mutates(&self) -> bool {
        false
    }
}
