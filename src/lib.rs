//! Command-driven internship record keeping.
//!
//! Internship applications are records in an in-memory book, persisted to a
//! JSON data file. Users manipulate the book through short text commands
//! (`add`, `find`, `sort`, `adddeadline`, ...) made of a command word
//! followed by prefixed arguments such as `c/Google` or `dl/20-04-2026`.

pub mod domain;
pub use domain::{Internship, InternshipBook, Task, UserPrefs};

pub mod logic;
pub use logic::{CommandResult, LogicError, LogicManager};

pub mod storage;
pub use storage::{JsonStorage, Storage};
