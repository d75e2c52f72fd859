//! Executable commands.
//!
//! Every user action is a [`Command`] value produced by the parser and run
//! against the [`Model`]. A command either returns a [`CommandResult`] with
//! the feedback to show, or a [`CommandError`] leaving the model unchanged.

mod add_client;
mod add_product;
mod delete;
mod edit_client;
mod find;
mod general;
mod index;

pub use add_client::AddClientCommand;
pub use add_product::AddProductCommand;
pub use delete::{DeleteClientCommand, DeleteProductCommand};
pub use edit_client::{EditClientCommand, EditClientDescriptor};
pub use find::{FindClientCommand, FindProductCommand};
pub use general::{ClearCommand, ExitCommand, HelpCommand, ListCommand};
pub use index::Index;

use crate::error::{CommandError, CommandOutcome};
use crate::model::Model;
use std::fmt;

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback_to_user: String,
    exit: bool,
}

impl CommandResult {
    pub fn new(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            exit: false,
        }
    }

    /// A result that also asks the application to stop.
    pub fn exit(feedback_to_user: impl Into<String>) -> Self {
        Self {
            feedback_to_user: feedback_to_user.into(),
            exit: true,
        }
    }

    pub fn feedback_to_user(&self) -> &str {
        &self.feedback_to_user
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// An action that can be executed against the model.
pub trait Command: fmt::Debug {
    /// Run the command.
    ///
    /// # Errors
    ///
    /// A `CommandError` whose message is shown to the user; the model must
    /// be left untouched when an error is returned.
    fn execute(&self, model: &mut Model) -> CommandOutcome<CommandResult>;

    /// Whether a successful run may have changed the address book.
    fn mutates(&self) -> bool {
        true
    }
}

/// Look up the record at `index` of a filtered list, mapping an
/// out-of-range index to `error`.
fn record_at<'a, T>(list: &[&'a T], index: Index, error: CommandError) -> CommandOutcome<&'a T> {
    list.get(index.zero_based()).copied().ok_or(error)
}
