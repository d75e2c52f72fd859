use super::{Command, CommandResult};
use crate::error::CommandOutcome;
use crate::matching::NameContainsKeywordsPredicate;
use crate::model::Model;

/// Shows only the clients whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindClientCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindClientCommand {
    pub const COMMAND_WORD: &'static str = "find-client";

    pub const MESSAGE_USAGE: &'static str = "find-client: Finds all clients whose names contain \
any of the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-client alice bob charlie";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindClientCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.update_filtered_client_list(self.predicate.clone());
        let count = model.filtered_client_list().len();
        Ok(CommandResult::new(format!("{} clients listed!", count)))
    }

    fn mutates(&self) -> bool {
        false
    }
}

/// Shows only the products whose name contains any of the keywords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindProductCommand {
    predicate: NameContainsKeywordsPredicate,
}

impl FindProductCommand {
    pub const COMMAND_WORD: &'static str = "find-product";

    pub const MESSAGE_USAGE: &'static str = "find-product: Finds all products whose names \
contain any of the specified keywords (case-insensitive) and displays them as a list with index \
numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find-product cannon daisy";

    pub fn new(predicate: NameContainsKeywordsPredicate) -> Self {
        Self { predicate }
    }
}

impl Command for FindProductCommand {
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult> {
        model.update_filtered_product_list(self.predicate.clone());
        let count = model.filtered_product_list().len();
        Ok(CommandResult::new(format!("{} products listed!", count)))
    }

    fn mutates(&self) -> bool {
        false
    }
}
