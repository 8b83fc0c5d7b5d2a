use std::fmt;

use non_empty_string::NonEmptyString;

use super::field::{Deadline, InvalidFieldError};

/// A piece of work attached to an internship record, such as "prepare for
/// technical interview".
///
/// A task always has a non-blank body and may carry a [`Deadline`]. The
/// deadline is optional at construction and may be attached later through
/// [`Task::set_deadline`]; there is no way to remove one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    body: NonEmptyString,
    deadline: Option<Deadline>,
}

impl Task {
    /// Creates a task from its body text and an optional deadline.
    ///
    /// This is the only constructor: a task either has a deadline or it does
    /// not, and the two states cannot disagree.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidFieldError`] if the trimmed body is empty.
    pub fn new(body: &str, deadline: Option<Deadline>) -> Result<Self, InvalidFieldError> {
        let trimmed = body.trim();
        let body = NonEmptyString::new(trimmed.to_string())
            .map_err(|_| InvalidFieldError::new("Task"))?;
        Ok(Self { body, deadline })
    }

    /// The body text of the task.
    #[must_use]
    pub fn body(&self) -> &str {
        self.body.as_str()
    }

    /// The task's deadline, if one has been set.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns `true` if the task has a deadline.
    #[must_use]
    pub const fn has_deadline(&self) -> bool {
        self.deadline.is_some()
    }

    /// Sets or replaces the task's deadline.
    pub fn set_deadline(&mut self, deadline: Deadline) {
        self.deadline = Some(deadline);
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.deadline {
            Some(deadline) => write!(f, "{} Deadline: {deadline}", self.body),
            None => write!(f, "{}", self.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_body_is_rejected() {
        assert!(Task::new("", None).is_err());
        assert!(Task::new("  \t", None).is_err());

        let error = Task::new(" ", None).unwrap_err();
        assert_eq!(error.to_string(), "Task should not be blank!");
    }

    #[test]
    fn deadline_flag_tracks_presence() {
        let mut task = Task::new("apply online", None).unwrap();
        assert!(!task.has_deadline());
        assert!(task.deadline().is_none());

        task.set_deadline(Deadline::new("2026-04-20").unwrap());
        assert!(task.has_deadline());
        assert_eq!(task.deadline().unwrap().as_str(), "2026-04-20");
    }

    #[test]
    fn set_deadline_replaces_existing() {
        let mut task =
            Task::new("interview prep", Some(Deadline::new("2026-01-01").unwrap())).unwrap();
        task.set_deadline(Deadline::new("2026-02-02").unwrap());
        assert_eq!(task.deadline().unwrap().as_str(), "2026-02-02");
    }

    #[test]
    fn display_includes_deadline_only_when_set() {
        let task = Task::new("apply online", None).unwrap();
        assert_eq!(task.to_string(), "apply online");

        let task =
            Task::new("apply online", Some(Deadline::new("2026-04-20").unwrap())).unwrap();
        assert_eq!(task.to_string(), "apply online Deadline: 2026-04-20");
    }

    #[test]
    fn equality_covers_body_and_deadline() {
        let without = Task::new("apply", None).unwrap();
        let with = Task::new("apply", Some(Deadline::new("soon").unwrap())).unwrap();
        assert_ne!(without, with);
        assert_eq!(without, Task::new(" apply ", None).unwrap());
    }
}
