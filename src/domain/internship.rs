use std::{
    fmt,
    hash::{Hash, Hasher},
};

use super::{
    field::{
        ApplicationStatus, CompanyName, ContactEmail, ContactName, ContactNumber, Description,
        Location, Remark, Role,
    },
    task::Task,
    Deadline,
};

/// An internship application record.
///
/// The eight field values are fixed at construction; edits replace the whole
/// record in the owning collection. The remark and the owned task list are
/// the only mutable parts, and both are only reachable through this type.
#[derive(Debug, Clone)]
pub struct Internship {
    // Identity fields
    pub(crate) company_name: CompanyName,
    pub(crate) location: Location,
    pub(crate) role: Role,
    pub(crate) description: Description,

    // Data fields
    pub(crate) contact_name: ContactName,
    pub(crate) contact_email: ContactEmail,
    pub(crate) contact_number: ContactNumber,
    pub(crate) application_status: ApplicationStatus,

    pub(crate) remark: Remark,
    pub(crate) tasks: Vec<Task>,
}

impl Internship {
    /// Constructs a record from validated field values, with no tasks.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        company_name: CompanyName,
        contact_name: ContactName,
        contact_email: ContactEmail,
        contact_number: ContactNumber,
        location: Location,
        application_status: ApplicationStatus,
        description: Description,
        role: Role,
        remark: Remark,
    ) -> Self {
        Self {
            company_name,
            location,
            role,
            description,
            contact_name,
            contact_email,
            contact_number,
            application_status,
            remark,
            tasks: Vec::new(),
        }
    }

    /// The name of the company.
    #[must_use]
    pub const fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    /// The contact person's name.
    #[must_use]
    pub const fn contact_name(&self) -> &ContactName {
        &self.contact_name
    }

    /// The contact person's email address.
    #[must_use]
    pub const fn contact_email(&self) -> &ContactEmail {
        &self.contact_email
    }

    /// The contact person's phone number.
    #[must_use]
    pub const fn contact_number(&self) -> &ContactNumber {
        &self.contact_number
    }

    /// Where the internship is based.
    #[must_use]
    pub const fn location(&self) -> &Location {
        &self.location
    }

    /// The current application status.
    #[must_use]
    pub const fn application_status(&self) -> &ApplicationStatus {
        &self.application_status
    }

    /// The description of the internship.
    #[must_use]
    pub const fn description(&self) -> &Description {
        &self.description
    }

    /// The role applied for.
    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    /// The free-text remark on this record.
    #[must_use]
    pub const fn remark(&self) -> &Remark {
        &self.remark
    }

    /// Replaces the remark.
    pub fn set_remark(&mut self, remark: Remark) {
        self.remark = remark;
    }

    /// The tasks owned by this record, in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The number of tasks owned by this record.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Appends a task to this record's task list.
    pub fn add_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Sets the deadline of the task at the given zero-based index.
    ///
    /// Returns `false` if the index is out of range; the record is unchanged.
    pub fn set_task_deadline(&mut self, index: usize, deadline: Deadline) -> bool {
        match self.tasks.get_mut(index) {
            Some(task) => {
                task.set_deadline(deadline);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if both records describe the same internship.
    ///
    /// Two records are the same internship if their identity fields (company
    /// name, location, role and description) match, regardless of contact and
    /// status data.
    #[must_use]
    pub fn is_same_internship(&self, other: &Self) -> bool {
        self.company_name == other.company_name
            && self.location == other.location
            && self.role == other.role
            && self.description == other.description
    }
}

/// Full equality: all eight field values match. The remark and task list are
/// excluded.
impl PartialEq for Internship {
    fn eq(&self, other: &Self) -> bool {
        self.company_name == other.company_name
            && self.contact_name == other.contact_name
            && self.contact_email == other.contact_email
            && self.contact_number == other.contact_number
            && self.location == other.location
            && self.application_status == other.application_status
            && self.description == other.description
            && self.role == other.role
    }
}

impl Eq for Internship {}

/// Hashing follows the identity fields only, consistent with both equality
/// notions.
impl Hash for Internship {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.company_name.hash(state);
        self.location.hash(state);
        self.role.hash(state);
        self.description.hash(state);
    }
}

impl fmt::Display for Internship {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}; Contact Name: {}; Contact Email: {}; Contact Number: {}; Location: {}; Status: \
             {}; Description: {}; Role: {}; Remark: {}",
            self.company_name,
            self.contact_name,
            self.contact_email,
            self.contact_number,
            self.location,
            self.application_status,
            self.description,
            self.role,
            self.remark,
        )?;

        if !self.tasks.is_empty() {
            let tasks = self
                .tasks
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            write!(f, "; Tasks: [{tasks}]")?;
        }

        Ok(())
    }
}
