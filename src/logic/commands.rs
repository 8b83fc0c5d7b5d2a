//! Command values and their execution against the internship book.
//!
//! Parsing and execution are separate steps: the parser produces a
//! [`Command`] value, and executing it applies the change to the book and
//! yields a [`CommandResult`] for the presentation layer.

use std::num::NonZeroUsize;

use crate::domain::InternshipBook;

mod add;
pub use add::AddCommand;

mod add_deadline;
pub use add_deadline::AddDeadlineCommand;

mod add_task;
pub use add_task::AddTaskCommand;

mod exit;
pub use exit::ExitCommand;

mod find;
pub use find::FindCommand;

mod list;
pub use list::ListCommand;

mod remark;
pub use remark::RemarkCommand;

mod sort;
pub use sort::SortCommand;

/// A position in the currently displayed (filtered) list of internships.
///
/// Users supply one-based indices; internally the index is zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(usize);

impl Index {
    /// Converts a user-facing one-based index.
    #[must_use]
    pub const fn from_one_based(index: NonZeroUsize) -> Self {
        Self(index.get() - 1)
    }

    /// The zero-based position.
    #[must_use]
    pub const fn zero_based(self) -> usize {
        self.0
    }

    /// The user-facing one-based position.
    #[must_use]
    pub const fn one_based(self) -> usize {
        self.0 + 1
    }
}

/// A fully parsed command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new internship record.
    Add(AddCommand),
    /// Replace the filtered-view predicate.
    Find(FindCommand),
    /// Reset the filtered view to show all records.
    List(ListCommand),
    /// Reorder the collection.
    Sort(SortCommand),
    /// Append a task to a record.
    AddTask(AddTaskCommand),
    /// Attach a deadline to a record's task.
    AddDeadline(AddDeadlineCommand),
    /// Replace a record's remark.
    Remark(RemarkCommand),
    /// End the session.
    Exit(ExitCommand),
}

impl Command {
    /// Executes the command against the book.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] if the command cannot be applied to the
    /// current state of the book; the book is left unchanged in that case.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        match self {
            Self::Add(command) => command.execute(book),
            Self::Find(command) => command.execute(book),
            Self::List(command) => command.execute(book),
            Self::Sort(command) => command.execute(book),
            Self::AddTask(command) => command.execute(book),
            Self::AddDeadline(command) => command.execute(book),
            Self::Remark(command) => command.execute(book),
            Self::Exit(command) => command.execute(book),
        }
    }
}

/// The outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    show_view: bool,
    exit: bool,
}

impl CommandResult {
    /// A plain feedback message.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_view: false,
            exit: false,
        }
    }

    /// A feedback message for a command that changed the filtered view.
    pub fn with_view(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_view: true,
            exit: false,
        }
    }

    /// A feedback message for the command ending the session.
    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_view: false,
            exit: true,
        }
    }

    /// The human-readable feedback message.
    #[must_use]
    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    /// Whether the filtered view changed and should be re-rendered.
    #[must_use]
    pub const fn show_view(&self) -> bool {
        self.show_view
    }

    /// Whether the session should end.
    #[must_use]
    pub const fn is_exit(&self) -> bool {
        self.exit
    }
}

/// Failures raised while applying a parsed command to the book.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The internship index is out of range of the filtered view.
    #[error("The internship index provided is invalid")]
    InvalidInternshipIndex,

    /// The task index is out of range of the record's task list.
    #[error("The task index provided is invalid")]
    InvalidTaskIndex,

    /// A record with the same identity fields is already in the book.
    #[error("This internship already exists in the book")]
    DuplicateInternship,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_converts_between_bases() {
        let index = Index::from_one_based(NonZeroUsize::new(3).unwrap());
        assert_eq!(index.zero_based(), 2);
        assert_eq!(index.one_based(), 3);
    }
}
