use super::{CommandError, CommandResult, Index};
use crate::domain::{InternshipBook, Task};

/// Appends a task to the internship at a filtered-view index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTaskCommand {
    index: Index,
    task: Task,
}

impl AddTaskCommand {
    /// The command word.
    pub const WORD: &'static str = "addtask";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "addtask: Adds a task to the internship identified by the \
         index number used in the displayed internship list.\n\
         Parameters: INDEX (must be a positive integer) t/TASK\n\
         Example: addtask 1 t/prepare for technical interview";

    /// Creates the command from a parsed index and task.
    #[must_use]
    pub const fn new(index: Index, task: Task) -> Self {
        Self { index, task }
    }

    /// Appends the task to the selected record.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidInternshipIndex`] if the index is out
    /// of range of the filtered view.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        let Some(internship) = book.filtered_internship_mut(self.index.zero_based()) else {
            return Err(CommandError::InvalidInternshipIndex);
        };

        internship.add_task(self.task);
        let message = format!("New task added to internship: {internship}");
        Ok(CommandResult::new(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::internship::tests::sample;

    fn index(one_based: usize) -> Index {
        Index::from_one_based(std::num::NonZeroUsize::new(one_based).unwrap())
    }

    #[test]
    fn execute_appends_a_task_to_the_selected_record() {
        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));

        let command = AddTaskCommand::new(index(1), Task::new("apply online", None).unwrap());
        let result = command.execute(&mut book).unwrap();

        assert_eq!(book.internships()[0].task_count(), 1);
        assert!(result.feedback().contains("Tasks: [apply online]"));
    }

    #[test]
    fn execute_rejects_an_out_of_range_index() {
        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));

        let command = AddTaskCommand::new(index(2), Task::new("apply online", None).unwrap());
        assert_eq!(
            command.execute(&mut book).unwrap_err(),
            CommandError::InvalidInternshipIndex
        );
    }
}
