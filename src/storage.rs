//! Persistence of the internship book and user preferences.
//!
//! The domain types do not serialize themselves; this module owns the
//! serialized representations and converts them to and from the domain,
//! re-validating every field value on the way in. The core logic never
//! performs I/O: it hands a snapshot to a [`Storage`] implementation after
//! each executed command.

use std::{io, path::PathBuf};

mod data;

mod json;
pub use json::JsonStorage;

use crate::domain::{InternshipBook, InvalidFieldError, UserPrefs};

/// The storage collaborator's interface.
///
/// Implementations read a previously persisted snapshot at startup and write
/// the current snapshot after each successfully executed command.
pub trait Storage {
    /// Reads the persisted internship book.
    ///
    /// Returns `Ok(None)` if nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the data exists but cannot be read,
    /// decoded, or validated.
    fn load_book(&self) -> Result<Option<InternshipBook>, LoadError>;

    /// Writes the given snapshot of the internship book.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] distinguishing permission failures from other
    /// I/O failures.
    fn save_book(&self, book: &InternshipBook) -> Result<(), SaveError>;

    /// Reads the persisted user preferences.
    ///
    /// Returns `Ok(None)` if no preferences file exists yet.
    ///
    /// # Errors
    ///
    /// Returns a [`LoadError`] if the preferences exist but cannot be read
    /// or decoded.
    fn load_prefs(&self) -> Result<Option<UserPrefs>, LoadError>;

    /// Writes the user preferences.
    ///
    /// # Errors
    ///
    /// Returns a [`SaveError`] distinguishing permission failures from other
    /// I/O failures.
    fn save_prefs(&self, prefs: &UserPrefs) -> Result<(), SaveError>;
}

/// Failures while persisting a snapshot.
///
/// Permission problems are reported separately from other I/O failures so
/// the caller can render a more actionable message.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// The file or its folder is not writable.
    #[error(
        "Could not save data to file {} due to insufficient permissions to write to the file or \
         the folder.",
        .path.display()
    )]
    PermissionDenied {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Any other I/O failure.
    #[error("Could not save data due to the following error: {0}")]
    Io(#[from] io::Error),

    /// The snapshot could not be encoded.
    #[error("Could not save data due to the following error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Failures while reading a persisted snapshot.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file exists but could not be read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid JSON for the expected schema.
    #[error("data file {} is not in the expected format: {source}", .path.display())]
    Malformed {
        /// The offending file.
        path: PathBuf,
        /// The decode error.
        #[source]
        source: serde_json::Error,
    },

    /// The file decoded, but a stored field value fails validation.
    #[error(transparent)]
    Invalid(#[from] InvalidFieldError),
}
