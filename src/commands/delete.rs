use super::{record_at, Command, CommandResult, Index};
use crate::error::{CommandError, CommandOutcome};
use crate::model::Model;

/// Deletes the client at a position of the displayed client list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteClientCommand {
    target_index: Index,
}

impl DeleteClientCommand {
    pub const COMMAND_WORD: &'static str = "delete-client";

    pub const MESSAGE_USAGE: &'static str = "delete-client: Deletes the client identified by the \
index number used in the displayed client list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete-client 1";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }
}

impl Command for DeleteClientCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        let shown = model.filtered_client_list();
        let to_delete =
            record_at(&shown, self.target_index, CommandError::InvalidClientIndex)?.clone();

        model
            .delete_client(&to_delete)
            .map_err(|_| CommandError::InvalidClientIndex)?;
        Ok(CommandResult::new(format!("Deleted Client: {}", to_delete)))
    }
}

/// Deletes the product at a position of the displayed product list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteProductCommand {
    target_index: Index,
}

impl DeleteProductCommand {
    pub const COMMAND_WORD: &'static str = "delete-product";

    pub const MESSAGE_USAGE: &'static str = "delete-product: Deletes the product identified by \
the index number used in the displayed product list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete-product 1";

    pub fn new(target_index: Index) -> Self {
        Self { target_index }
    }
}

impl Command for DeleteProductCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        let shown = model.filtered_product_list();
        let to_delete =
            record_at(&shown, self.target_index, CommandError::InvalidProductIndex)?.clone();

        model
            .delete_product(&to_delete)
            .map_err(|_| CommandError::InvalidProductIndex)?;
        Ok(CommandResult::new(format!("Deleted Product: {}", to_delete)))
    }
}
