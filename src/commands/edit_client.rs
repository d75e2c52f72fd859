use super::{record_at, Command, CommandResult, Index};
use crate::domain::{Address, Email, Name, PhoneNumber};
use crate::error::{CommandError, CommandOutcome};
use crate::model::{ListFilter, Model};
use crate::models::Client;

/// Field values to replace on a client. Unset fields keep their current
/// value; the ID is never edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditClientDescriptor {
    pub name: Option<Name>,
    pub phone_number: Option<PhoneNumber>,
    pub email: Option<Email>,
    pub address: Option<Address>,
}

impl EditClientDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone_number.is_some()
            || self.email.is_some()
            || self.address.is_some()
    }

    /// Build the edited copy of `client`.
    pub fn apply_to(&self, client: &Client) -> Client {
        Client::new(
            client.id().clone(),
            self.name.clone().unwrap_or_else(|| client.name().clone()),
            self.phone_number
                .clone()
                .unwrap_or_else(|| client.phone_number().clone()),
            self.email.clone().unwrap_or_else(|| client.email().clone()),
            self.address
                .clone()
                .unwrap_or_else(|| client.address().clone()),
        )
    }
}

/// Edits the client at a position of the displayed client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditClientCommand {
    index: Index,
    descriptor: EditClientDescriptor,
}

impl EditClientCommand {
    pub const COMMAND_WORD: &'static str = "edit-client";

    pub const MESSAGE_USAGE: &'static str = "edit-client: Edits the details of the client \
identified by the index number used in the displayed client list. Existing values will be \
overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE_NUMBER] [e/EMAIL] [a/ADDRESS]\n\
Example: edit-client 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditClientDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn success_message(client: &Client) -> String {
        format!("Edited Client: {}", client)
    }
}

impl Command for EditClientCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        let shown = model.filtered_client_list();
        let to_edit = record_at(&shown, self.index, CommandError::InvalidClientIndex)?.clone();
        let edited = self.descriptor.apply_to(&to_edit);

        if to_edit != edited && model.has_client(&edited) {
            return Err(CommandError::DuplicateClient);
        }

        model
            .set_client(&to_edit, edited.clone())
            .map_err(|_| CommandError::DuplicateClient)?;
        model.update_filtered_client_list(ListFilter::All);
        Ok(CommandResult::new(Self::success_message(&edited)))
    }
}
