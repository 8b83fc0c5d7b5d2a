use tracing::info;

use super::{
    commands::{CommandError, CommandResult},
    parser::{self, ParseError},
};
use crate::{
    domain::{InternshipBook, Task, UserPrefs},
    storage::{SaveError, Storage},
};

/// Any failure raised while executing a single command line.
#[derive(Debug, thiserror::Error)]
pub enum LogicError {
    /// The command line could not be interpreted.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed command could not be applied to the book.
    #[error(transparent)]
    Command(#[from] CommandError),

    /// The command was applied but the snapshot could not be persisted.
    #[error(transparent)]
    Save(#[from] SaveError),
}

/// Sequences the command pipeline: parse, execute against the in-memory
/// book, then hand the snapshot to storage.
///
/// Commands run strictly one at a time; there is no overlap and no locking.
/// A persistence failure does not roll back the in-memory mutation: the
/// command counts as applied, and the error is surfaced alongside the
/// retained state.
#[derive(Debug)]
pub struct LogicManager<S> {
    book: InternshipBook,
    prefs: UserPrefs,
    storage: S,
}

impl<S: Storage> LogicManager<S> {
    /// Creates a manager over an already loaded book and preferences.
    pub const fn new(book: InternshipBook, prefs: UserPrefs, storage: S) -> Self {
        Self {
            book,
            prefs,
            storage,
        }
    }

    /// Parses and executes one command line, then persists the snapshot.
    ///
    /// # Errors
    ///
    /// Returns a [`LogicError`] for the first stage that fails. All failures
    /// are terminal for this command only; the manager accepts further
    /// commands afterwards.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult, LogicError> {
        info!(command = input, "user command");

        let command = parser::parse_command(input)?;
        let result = command.execute(&mut self.book)?;
        self.storage.save_book(&self.book)?;

        Ok(result)
    }

    /// The in-memory book.
    pub const fn book(&self) -> &InternshipBook {
        &self.book
    }

    /// The active user preferences.
    pub const fn prefs(&self) -> &UserPrefs {
        &self.prefs
    }

    /// The due-task view over the current book.
    pub fn due_tasks(&self) -> Vec<&Task> {
        self.book.due_tasks()
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::storage::LoadError;

    /// Discards snapshots; stands in for real storage in pipeline tests.
    struct NullStorage;

    impl Storage for NullStorage {
        fn load_book(&self) -> Result<Option<InternshipBook>, LoadError> {
            Ok(None)
        }

        fn save_book(&self, _book: &InternshipBook) -> Result<(), SaveError> {
            Ok(())
        }

        fn load_prefs(&self) -> Result<Option<UserPrefs>, LoadError> {
            Ok(None)
        }

        fn save_prefs(&self, _prefs: &UserPrefs) -> Result<(), SaveError> {
            Ok(())
        }
    }

    /// Fails every save, to exercise the persistence failure path.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn load_book(&self) -> Result<Option<InternshipBook>, LoadError> {
            Ok(None)
        }

        fn save_book(&self, _book: &InternshipBook) -> Result<(), SaveError> {
            Err(SaveError::Io(io::Error::other("disk on fire")))
        }

        fn load_prefs(&self) -> Result<Option<UserPrefs>, LoadError> {
            Ok(None)
        }

        fn save_prefs(&self, _prefs: &UserPrefs) -> Result<(), SaveError> {
            Err(SaveError::Io(io::Error::other("disk on fire")))
        }
    }

    fn manager() -> LogicManager<NullStorage> {
        LogicManager::new(InternshipBook::new(), UserPrefs::default(), NullStorage)
    }

    #[test]
    fn executes_a_full_add_find_sort_session() {
        let mut manager = manager();

        manager
            .execute("add c/Initech d/Backend s/Applied")
            .unwrap();
        manager
            .execute("add c/Acme d/Frontend s/Interview r/Web Developer")
            .unwrap();

        let result = manager.execute("find backend").unwrap();
        assert_eq!(result.feedback(), "1 internships listed!");

        manager.execute("list").unwrap();
        manager.execute("sort c/ asc").unwrap();
        assert_eq!(
            manager.book().internships()[0].company_name().as_str(),
            "Acme"
        );
    }

    #[test]
    fn add_task_then_deadline_through_the_pipeline() {
        let mut manager = manager();
        manager
            .execute("add c/Acme d/Backend s/Applied")
            .unwrap();
        manager.execute("addtask 1 t/prepare resume").unwrap();

        let result = manager.execute("adddeadline 1 1 dl/2026-04-20").unwrap();
        assert!(result.feedback().starts_with("Deadline Added:"));

        let due = manager.due_tasks();
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].deadline().unwrap().as_str(), "2026-04-20");
    }

    #[test]
    fn parse_failures_surface_and_leave_the_book_untouched() {
        let mut manager = manager();
        let error = manager.execute("add c/Acme").unwrap_err();
        assert!(matches!(error, LogicError::Parse(_)));
        assert!(manager.book().is_empty());
    }

    #[test]
    fn command_failures_surface_with_their_own_kind() {
        let mut manager = manager();
        let error = manager.execute("addtask 5 t/anything").unwrap_err();
        assert!(matches!(
            error,
            LogicError::Command(CommandError::InvalidInternshipIndex)
        ));
    }

    #[test]
    fn persistence_failure_keeps_the_applied_mutation() {
        let mut manager =
            LogicManager::new(InternshipBook::new(), UserPrefs::default(), BrokenStorage);

        let error = manager
            .execute("add c/Acme d/Backend s/Applied")
            .unwrap_err();

        assert!(matches!(error, LogicError::Save(_)));
        assert_eq!(
            error.to_string(),
            "Could not save data due to the following error: disk on fire"
        );
        // The in-memory mutation is not rolled back.
        assert_eq!(manager.book().len(), 1);
    }

    #[test]
    fn further_commands_are_accepted_after_a_failure() {
        let mut manager = manager();
        assert!(manager.execute("bogus").is_err());
        assert!(manager.execute("add c/Acme d/Backend s/Applied").is_ok());
    }
}
