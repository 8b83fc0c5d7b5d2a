use super::{CommandError, CommandResult};
use crate::domain::{sort, InternshipBook, SortField, SortOrder};

/// Reorders the full collection by a field and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortCommand {
    field: SortField,
    order: SortOrder,
}

impl SortCommand {
    /// The command word.
    pub const WORD: &'static str = "sort";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "sort: Sorts the internship list by the field named by a \
         prefix, ascending or descending.\n\
         Parameters: FIELD_PREFIX ORDER (asc or desc)\n\
         Example: sort c/ asc";

    /// Creates the command from the parsed sort specification.
    #[must_use]
    pub const fn new(field: SortField, order: SortOrder) -> Self {
        Self { field, order }
    }

    /// Reorders the live collection in place (not just the filtered view).
    ///
    /// # Errors
    ///
    /// Never fails; the signature matches the other commands.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        book.sort_by(sort::comparator(self.field, self.order));
        Ok(CommandResult::with_view(format!(
            "Sorted internships by {} in {} order",
            self.field, self.order
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::internship::tests::sample;

    fn companies(book: &InternshipBook) -> Vec<&str> {
        book.internships()
            .iter()
            .map(|internship| internship.company_name().as_str())
            .collect()
    }

    #[test]
    fn execute_sorts_ascending_and_descending() {
        let mut book = InternshipBook::new();
        book.add(sample("Initech", "SWE"));
        book.add(sample("Acme", "SWE"));
        book.add(sample("Globex", "SWE"));

        SortCommand::new(SortField::Company, SortOrder::Ascending)
            .execute(&mut book)
            .unwrap();
        assert_eq!(companies(&book), ["Acme", "Globex", "Initech"]);

        let result = SortCommand::new(SortField::Company, SortOrder::Descending)
            .execute(&mut book)
            .unwrap();
        assert_eq!(companies(&book), ["Initech", "Globex", "Acme"]);
        assert_eq!(
            result.feedback(),
            "Sorted internships by company name in descending order"
        );
    }

    #[test]
    fn execute_reorders_the_full_collection_under_a_filter() {
        let mut book = InternshipBook::new();
        book.add(sample("Initech", "SWE"));
        book.add(sample("Acme", "SWE"));
        book.set_filter(crate::domain::FindPredicate::new(nonempty::NonEmpty::new(
            "acme".to_string(),
        )));

        SortCommand::new(SortField::Company, SortOrder::Ascending)
            .execute(&mut book)
            .unwrap();

        // Both records moved, not only the one in the view.
        assert_eq!(companies(&book), ["Acme", "Initech"]);
    }
}
