use super::{Command, CommandResult};
use crate::error::{CommandError, CommandOutcome};
use crate::model::Model;
use crate::models::Product;

/// Adds a product to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddProductCommand {
    to_add: Product,
}

impl AddProductCommand {
    pub const COMMAND_WORD: &'static str = "add-product";

    pub const MESSAGE_USAGE: &'static str = "add-product: Adds a product to the address book. \
Parameters: n/NAME u/UNIT_PRICE\n\
Example: add-product n/Cannon u/4.56";

    pub fn new(to_add: Product) -> Self {
        Self { to_add }
    }

    pub fn success_message(product: &Product) -> String {
        format!("New product added: {}", product)
    }
}

impl Command for AddProductCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        // adding only fails when an equal product already exists
        model
            .add_product(self.to_add.clone())
            .map_err(|_| CommandError::DuplicateProduct)?;
        Ok(CommandResult::new(Self::success_message(&self.to_add)))
    }
}
