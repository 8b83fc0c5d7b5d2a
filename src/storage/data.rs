//! Serialized representations of the domain types.
//!
//! These structs define the JSON schema of the data file. Converting back to
//! the domain goes through the field constructors, so a hand-edited data file
//! is validated exactly like command input.

use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplicationStatus, CompanyName, ContactEmail, ContactName, ContactNumber, Deadline,
    Description, Internship, InternshipBook, InvalidFieldError, Location, Remark, Role, Task,
};

/// The root of the data file.
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct BookData {
    pub(crate) internships: Vec<InternshipData>,
}

/// One serialized internship record.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct InternshipData {
    pub(crate) company_name: String,
    pub(crate) contact_name: String,
    pub(crate) contact_email: String,
    pub(crate) contact_number: String,
    pub(crate) location: String,
    pub(crate) application_status: String,
    pub(crate) description: String,
    pub(crate) role: String,
    #[serde(default)]
    pub(crate) remark: String,
    #[serde(default)]
    pub(crate) tasks: Vec<TaskData>,
}

/// One serialized task.
///
/// Older data files stored a separate `deadline_set` flag next to the
/// deadline payload. The flag is accepted on load and reconciled with the
/// payload: a flag claiming a deadline that is not there (or vice versa)
/// normalizes to "no deadline", so the two can never disagree in the domain.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct TaskData {
    pub(crate) task: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) deadline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) deadline_set: Option<bool>,
}

impl From<&InternshipBook> for BookData {
    fn from(book: &InternshipBook) -> Self {
        Self {
            internships: book.internships().iter().map(InternshipData::from).collect(),
        }
    }
}

impl BookData {
    pub(crate) fn try_into_book(self) -> Result<InternshipBook, InvalidFieldError> {
        let internships = self
            .internships
            .into_iter()
            .map(Internship::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(InternshipBook::from_internships(internships))
    }
}

impl From<&Internship> for InternshipData {
    fn from(internship: &Internship) -> Self {
        Self {
            company_name: internship.company_name().as_str().to_string(),
            contact_name: internship.contact_name().as_str().to_string(),
            contact_email: internship.contact_email().as_str().to_string(),
            contact_number: internship.contact_number().as_str().to_string(),
            location: internship.location().as_str().to_string(),
            application_status: internship.application_status().as_str().to_string(),
            description: internship.description().as_str().to_string(),
            role: internship.role().as_str().to_string(),
            remark: internship.remark().as_str().to_string(),
            tasks: internship.tasks().iter().map(TaskData::from).collect(),
        }
    }
}

impl TryFrom<InternshipData> for Internship {
    type Error = InvalidFieldError;

    fn try_from(data: InternshipData) -> Result<Self, Self::Error> {
        let mut internship = Self::new(
            CompanyName::new(&data.company_name)?,
            ContactName::new(&data.contact_name)?,
            ContactEmail::new(&data.contact_email)?,
            ContactNumber::new(&data.contact_number)?,
            Location::new(&data.location)?,
            ApplicationStatus::new(&data.application_status)?,
            Description::new(&data.description)?,
            Role::new(&data.role)?,
            Remark::new(&data.remark),
        );
        for task in data.tasks {
            internship.add_task(Task::try_from(task)?);
        }
        Ok(internship)
    }
}

impl From<&Task> for TaskData {
    fn from(task: &Task) -> Self {
        Self {
            task: task.body().to_string(),
            deadline: task.deadline().map(|deadline| deadline.as_str().to_string()),
            deadline_set: None,
        }
    }
}

impl TryFrom<TaskData> for Task {
    type Error = InvalidFieldError;

    fn try_from(data: TaskData) -> Result<Self, Self::Error> {
        let deadline = match (data.deadline_set, data.deadline) {
            (Some(false), _) | (_, None) => None,
            (_, Some(deadline)) => Some(Deadline::new(&deadline)?),
        };
        Self::new(&data.task, deadline)
    }
}
