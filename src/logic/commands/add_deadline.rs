use super::{CommandError, CommandResult, Index};
use crate::domain::{Deadline, InternshipBook};

/// Attaches a deadline to a task of an internship, both addressed by index.
///
/// The internship index resolves against the currently filtered view; the
/// task index against that record's task list. Both bounds use the same
/// policy: an index equal to or past the length is out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddDeadlineCommand {
    internship_index: Index,
    task_index: Index,
    deadline: Deadline,
}

impl AddDeadlineCommand {
    /// The command word.
    pub const WORD: &'static str = "adddeadline";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "adddeadline: Adds a deadline to a task of the internship \
         identified by the index number used in the displayed internship list.\n\
         Parameters: INDEX_INTERNSHIP (must be a positive integer) INDEX_TASK (must be a \
         positive integer) dl/DEADLINE\n\
         Example: adddeadline 1 1 dl/20-04-2026";

    /// Creates the command from the parsed indices and deadline.
    #[must_use]
    pub const fn new(internship_index: Index, task_index: Index, deadline: Deadline) -> Self {
        Self {
            internship_index,
            task_index,
            deadline,
        }
    }

    /// Sets the deadline through the owning record, then resets the filtered
    /// view to show all records.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidInternshipIndex`] or
    /// [`CommandError::InvalidTaskIndex`] when the respective index is out of
    /// range; the book is unchanged in either case.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        let Some(internship) = book.filtered_internship_mut(self.internship_index.zero_based())
        else {
            return Err(CommandError::InvalidInternshipIndex);
        };

        if !internship.set_task_deadline(self.task_index.zero_based(), self.deadline) {
            return Err(CommandError::InvalidTaskIndex);
        }

        let message = format!("Deadline Added: {internship}");
        book.clear_filter();
        Ok(CommandResult::with_view(message))
    }
}
