use super::{CommandError, CommandResult};
use crate::domain::InternshipBook;

/// Ends the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    /// The command word.
    pub const WORD: &'static str = "exit";

    /// The farewell message.
    pub const MESSAGE: &'static str = "Exiting internship manager as requested ...";

    /// Produces the exit result; the book is untouched.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other commands.
    pub fn execute(self, _book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        Ok(CommandResult::exit(Self::MESSAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execute_flags_the_session_end() {
        let mut book = InternshipBook::new();
        let result = ExitCommand.execute(&mut book).unwrap();
        assert!(result.is_exit());
        assert_eq!(result.feedback(), ExitCommand::MESSAGE);
    }
}
