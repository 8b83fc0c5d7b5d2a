use super::{CommandError, CommandResult};
use crate::domain::{FindPredicate, InternshipBook};

/// Replaces the filtered view with the records matching a keyword predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    predicate: FindPredicate,
}

impl FindCommand {
    /// The command word.
    pub const WORD: &'static str = "find";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "find: Finds all internships whose fields contain any of the \
         specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
         Parameters: KEYWORD [MORE_KEYWORDS]...\n\
         Example: find acme backend applied";

    /// Creates the command from the parsed predicate.
    #[must_use]
    pub const fn new(predicate: FindPredicate) -> Self {
        Self { predicate }
    }

    /// Swaps the active predicate and reports the resulting view size.
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other commands.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        book.set_filter(self.predicate);
        let count = book.filtered_len();
        Ok(CommandResult::with_view(format!(
            "{count} internships listed!"
        )))
    }
}

#[cfg(test)]
mod tests {
    use nonempty::NonEmpty;

    use super::*;
    use crate::domain::internship::tests::sample;

    fn predicate(keyword: &str) -> FindPredicate {
        FindPredicate::new(NonEmpty::new(keyword.to_string()))
    }

    #[test]
    fn execute_reports_the_match_count() {
        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));
        book.add(sample("Initech", "SWE"));
        book.add(sample("Acme Robotics", "Hardware"));

        let result = FindCommand::new(predicate("acme")).execute(&mut book).unwrap();
        assert_eq!(result.feedback(), "2 internships listed!");
        assert!(result.show_view());
        assert_eq!(book.filtered_len(), 2);
    }

    #[test]
    fn execute_with_no_matches_empties_the_view() {
        let mut book = InternshipBook::new();
        book.add(sample("Acme", "SWE"));

        let result = FindCommand::new(predicate("banking"))
            .execute(&mut book)
            .unwrap();
        assert_eq!(result.feedback(), "0 internships listed!");
        assert_eq!(book.filtered_len(), 0);
        assert_eq!(book.len(), 1);
    }
}
