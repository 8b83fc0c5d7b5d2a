use super::{CommandError, CommandResult, Index};
use crate::domain::{InternshipBook, Remark};

/// Replaces the remark of the internship at a filtered-view index.
///
/// An empty remark clears the existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemarkCommand {
    index: Index,
    remark: Remark,
}

impl RemarkCommand {
    /// The command word.
    pub const WORD: &'static str = "remark";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "remark: Edits the remark of the internship identified by \
         the index number used in the displayed internship list. Existing remarks are \
         overwritten; an empty remark clears it.\n\
         Parameters: INDEX (must be a positive integer) re/[REMARK]\n\
         Example: remark 1 re/referred by a friend";

    /// Creates the command from a parsed index and remark.
    #[must_use]
    pub const fn new(index: Index, remark: Remark) -> Self {
        Self { index, remark }
    }

    /// Replaces the remark on the selected record.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::InvalidInternshipIndex`] if the index is out
    /// of range of the filtered view.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        let Some(internship) = book.filtered_internship_mut(self.index.zero_based()) else {
            return Err(CommandError::InvalidInternshipIndex);
        };

        let cleared = self.remark.is_empty();
        internship.set_remark(self.remark);
        let message = if cleared {
            format!("Removed remark from internship: {internship}")
        } else {
            format!("Added remark to internship: {internship}")
        };
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
    fn execute_replaces_the_remark() {
        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));

        let result = RemarkCommand::new(index(1), Remark::new("referred by a friend"))
            .execute(&mut book)
            .unwrap();

        assert!(result.feedback().starts_with("Added remark to internship:"));
        assert_eq!(
            book.internships()[0].remark().as_str(),
            "referred by a friend"
        );
    }

    #[test]
    fn execute_with_empty_remark_clears_it() {
        let mut book = InternshipBook::new();
        let mut internship = sample("Acme", "SWE");
        internship.set_remark(Remark::new("old note"));
        book.add(internship);

        let result = RemarkCommand::new(index(1), Remark::new(""))
            .execute(&mut book)
            .unwrap();

        assert!(result
            .feedback()
            .starts_with("Removed remark from internship:"));
        assert!(book.internships()[0].remark().is_empty());
    }

    #[test]
    fn execute_rejects_an_out_of_range_index() {
        let mut book = InternshipBook::new();
        let error = RemarkCommand::new(index(1), Remark::new("note"))
            .execute(&mut book)
            .unwrap_err();
        assert_eq!(error, CommandError::InvalidInternshipIndex);
    }
}
