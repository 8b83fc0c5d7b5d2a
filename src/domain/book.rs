use nonempty::NonEmpty;

use super::{field::Deadline, internship::Internship, task::Task};

/// The maximum number of tasks reported by the due-task view.
pub const DUE_TASK_LIMIT: usize = 3;

/// A predicate selecting records whose fields contain any of a set of
/// keywords, case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPredicate {
    keywords: NonEmpty<String>,
}

impl FindPredicate {
    /// Creates a predicate from at least one keyword.
    #[must_use]
    pub fn new(keywords: NonEmpty<String>) -> Self {
        Self { keywords }
    }

    /// Returns `true` if any keyword is a case-insensitive substring of any
    /// of the record's textual fields.
    #[must_use]
    pub fn matches(&self, internship: &Internship) -> bool {
        let fields = [
            internship.company_name().as_str(),
            internship.contact_name().as_str(),
            internship.contact_email().as_str(),
            internship.contact_number().as_str(),
            internship.location().as_str(),
            internship.application_status().as_str(),
            internship.description().as_str(),
            internship.role().as_str(),
            internship.remark().as_str(),
        ];

        self.keywords.iter().any(|keyword| {
            let keyword = keyword.to_lowercase();
            fields
                .iter()
                .any(|field| field.to_lowercase().contains(&keyword))
        })
    }
}

/// The in-memory collection of internship records.
///
/// The book owns the records and the currently active find predicate (the
/// *filtered view*). Index-based commands resolve against the filtered view;
/// sorting reorders the full collection.
#[derive(Debug, Clone, Default)]
pub struct InternshipBook {
    internships: Vec<Internship>,
    filter: Option<FindPredicate>,
}

impl InternshipBook {
    /// Creates an empty book showing all records.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            internships: Vec::new(),
            filter: None,
        }
    }

    /// Creates a book over an existing set of records, showing all of them.
    #[must_use]
    pub const fn from_internships(internships: Vec<Internship>) -> Self {
        Self {
            internships,
            filter: None,
        }
    }

    /// All records, in collection order.
    #[must_use]
    pub fn internships(&self) -> &[Internship] {
        &self.internships
    }

    /// The number of records in the book.
    #[must_use]
    pub fn len(&self) -> usize {
        self.internships.len()
    }

    /// Returns `true` if the book holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.internships.is_empty()
    }

    /// Appends a record to the collection.
    pub fn add(&mut self, internship: Internship) {
        self.internships.push(internship);
    }

    /// Replaces the filtered-view predicate.
    pub fn set_filter(&mut self, predicate: FindPredicate) {
        self.filter = Some(predicate);
    }

    /// Resets the filtered view to show all records.
    pub fn clear_filter(&mut self) {
        self.filter = None;
    }

    /// The records currently selected by the filtered view, in collection
    /// order.
    #[must_use]
    pub fn filtered(&self) -> Vec<&Internship> {
        self.internships
            .iter()
            .filter(|internship| self.is_shown(internship))
            .collect()
    }

    /// The number of records in the filtered view.
    #[must_use]
    pub fn filtered_len(&self) -> usize {
        self.internships
            .iter()
            .filter(|internship| self.is_shown(internship))
            .count()
    }

    /// Resolves a zero-based filtered-view index to the record, for mutation
    /// through the record's own interface.
    ///
    /// Returns `None` if the index is out of range of the filtered view.
    pub fn filtered_internship_mut(&mut self, index: usize) -> Option<&mut Internship> {
        let master = self
            .internships
            .iter()
            .enumerate()
            .filter(|(_, internship)| {
                self.filter
                    .as_ref()
                    .is_none_or(|predicate| predicate.matches(internship))
            })
            .map(|(position, _)| position)
            .nth(index)?;
        self.internships.get_mut(master)
    }

    /// Reorders the full collection (not just the filtered view) in place.
    ///
    /// The sort is stable: records that compare equal keep their relative
    /// order.
    pub fn sort_by(&mut self, comparator: impl Fn(&Internship, &Internship) -> std::cmp::Ordering) {
        self.internships.sort_by(|a, b| comparator(a, b));
    }

    /// The due-task view: every task with a deadline, ascending by the
    /// deadline's raw text, truncated to [`DUE_TASK_LIMIT`].
    ///
    /// Tasks without a deadline are omitted entirely. This is a pure
    /// projection, recomputed from the live collection on each call.
    #[must_use]
    pub fn due_tasks(&self) -> Vec<&Task> {
        let mut due: Vec<&Task> = self
            .internships
            .iter()
            .flat_map(Internship::tasks)
            .filter(|task| task.has_deadline())
            .collect();
        due.sort_by(|a, b| {
            let a = a.deadline().map(Deadline::as_str);
            let b = b.deadline().map(Deadline::as_str);
            a.cmp(&b)
        });
        due.truncate(DUE_TASK_LIMIT);
        due
    }

    fn is_shown(&self, internship: &Internship) -> bool {
        self.filter
            .as_ref()
            .is_none_or(|predicate| predicate.matches(internship))
    }
}
