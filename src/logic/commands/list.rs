use super::{CommandError, CommandResult};
use crate::domain::InternshipBook;

/// Resets the filtered view to show every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListCommand;

impl ListCommand {
    /// The command word.
    pub const WORD: &'static str = "list";

    /// Clears the active find predicate.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other commands.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        book.clear_filter();
        Ok(CommandResult::with_view("Listed all internships"))
    }
}
