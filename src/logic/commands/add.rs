use super::{CommandError, CommandResult};
use crate::domain::{Internship, InternshipBook};

/// Adds a new internship record to the book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddCommand {
    internship: Internship,
}

impl AddCommand {
    /// The command word.
    pub const WORD: &'static str = "add";

    /// Usage shown when the command's arguments are malformed.
    pub const USAGE: &'static str = "add: Adds an internship to the book.\n\
         Parameters: c/COMPANY_NAME d/DESCRIPTION s/APPLICATION_STATUS [cn/CONTACT_NAME] \
         [ce/CONTACT_EMAIL] [cp/CONTACT_NUMBER] [l/LOCATION] [r/ROLE]\n\
         Example: add c/Acme d/Backend internship s/Applied cn/John Doe ce/john@acme.example \
         cp/91234567 l/Remote r/Software Engineer";

    /// Creates the command from an already validated record.
    #[must_use]
    pub const fn new(internship: Internship) -> Self {
        Self { internship }
    }

    /// Appends the record to the book.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::DuplicateInternship`] if a record with the
    /// same identity fields already exists.
    pub fn execute(self, book: &mut InternshipBook) -> Result<CommandResult, CommandError> {
        if book
            .internships()
            .iter()
            .any(|existing| existing.is_same_internship(&self.internship))
        {
            return Err(CommandError::DuplicateInternship);
        }

        let message = format!("New internship added: {}", self.internship);
        book.add(self.internship);
        Ok(CommandResult::new(message))
    }
}
