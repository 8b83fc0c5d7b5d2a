use std::{cmp::Ordering, fmt};

use super::internship::Internship;

/// A comparison function over internship records.
pub type Comparator = fn(&Internship, &Internship) -> Ordering;

/// The closed set of record fields that a sort request may name.
///
/// The declaration order is the fixed priority order used when resolving a
/// sort command: when several field prefixes are supplied at once, the first
/// field in this order wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Sort by company name.
    Company,
    /// Sort by contact name.
    ContactName,
    /// Sort by contact number.
    ContactNumber,
    /// Sort by contact email.
    ContactEmail,
    /// Sort by application status.
    Status,
    /// Sort by location.
    Location,
    /// Sort by role.
    Role,
    /// Sort by remark.
    Remark,
    /// Sort by description.
    Description,
}

fn by_company(a: &Internship, b: &Internship) -> Ordering {
    a.company_name().as_str().cmp(b.company_name().as_str())
}

fn by_contact_name(a: &Internship, b: &Internship) -> Ordering {
    a.contact_name().as_str().cmp(b.contact_name().as_str())
}

fn by_contact_number(a: &Internship, b: &Internship) -> Ordering {
    a.contact_number().as_str().cmp(b.contact_number().as_str())
}

fn by_contact_email(a: &Internship, b: &Internship) -> Ordering {
    a.contact_email().as_str().cmp(b.contact_email().as_str())
}

fn by_status(a: &Internship, b: &Internship) -> Ordering {
    a.application_status()
        .as_str()
        .cmp(b.application_status().as_str())
}

fn by_location(a: &Internship, b: &Internship) -> Ordering {
    a.location().as_str().cmp(b.location().as_str())
}

fn by_role(a: &Internship, b: &Internship) -> Ordering {
    a.role().as_str().cmp(b.role().as_str())
}

fn by_remark(a: &Internship, b: &Internship) -> Ordering {
    a.remark().as_str().cmp(b.remark().as_str())
}

fn by_description(a: &Internship, b: &Internship) -> Ordering {
    a.description().as_str().cmp(b.description().as_str())
}

impl SortField {
    /// One comparator per field, indexed by discriminant. Built once as data
    /// rather than re-derived through branching on each call.
    const COMPARATORS: [Comparator; 9] = [
        by_company,
        by_contact_name,
        by_contact_number,
        by_contact_email,
        by_status,
        by_location,
        by_role,
        by_remark,
        by_description,
    ];

    /// The ascending comparator for this field.
    ///
    /// String fields compare lexicographically on their wrapped value,
    /// case-sensitively, matching each field's own equality semantics.
    #[must_use]
    pub const fn comparator(self) -> Comparator {
        Self::COMPARATORS[self as usize]
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Company => "company name",
            Self::ContactName => "contact name",
            Self::ContactNumber => "contact number",
            Self::ContactEmail => "contact email",
            Self::Status => "application status",
            Self::Location => "location",
            Self::Role => "role",
            Self::Remark => "remark",
            Self::Description => "description",
        };
        write!(f, "{name}")
    }
}

/// The direction of a sort request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// The literal token selecting an ascending sort.
    pub const TOKEN_ASCENDING: &'static str = "asc";

    /// The literal token selecting a descending sort.
    pub const TOKEN_DESCENDING: &'static str = "desc";

    /// Resolves one of the two order tokens, or `None` for anything else.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            Self::TOKEN_ASCENDING => Some(Self::Ascending),
            Self::TOKEN_DESCENDING => Some(Self::Descending),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ascending => write!(f, "ascending"),
            Self::Descending => write!(f, "descending"),
        }
    }
}

/// Builds the total order over records for a parsed sort specification.
///
/// Descending reverses the field's comparator.
pub fn comparator(
    field: SortField,
    order: SortOrder,
) -> impl Fn(&Internship, &Internship) -> Ordering {
    let compare = field.comparator();
    move |a, b| match order {
        SortOrder::Ascending => compare(a, b),
        SortOrder::Descending => compare(a, b).reverse(),
    }
}
