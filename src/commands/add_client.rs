use super::{Command, CommandResult};
use crate::error::{CommandError, CommandOutcome};
use crate::model::Model;
use crate::models::Client;

/// Adds a client to the address book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddClientCommand {
    to_add: Client,
}

impl AddClientCommand {
    pub const COMMAND_WORD: &'static str = "add-client";

    pub const MESSAGE_USAGE: &'static str = "add-client: Adds a client to the address book. \
Parameters: n/NAME p/PHONE_NUMBER e/EMAIL a/ADDRESS\n\
Example: add-client n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25";

    pub fn new(to_add: Client) -> Self {
        Self { to_add }
    }

    pub fn success_message(client: &Client) -> String {
        format!("New client added: {}", client)
    }
}

impl Command for AddClientCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        // adding only fails when an equal client already exists
        model
            .add_client(self.to_add.clone())
            .map_err(|_| CommandError::DuplicateClient)?;
        Ok(CommandResult::new(Self::success_message(&self.to_add)))
    }
}
