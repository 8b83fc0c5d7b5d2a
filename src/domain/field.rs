use std::{
    fmt,
    hash::{Hash, Hasher},
    ops::Deref,
    str::FromStr,
};

use non_empty_string::NonEmptyString;

/// Error returned when a field's validity predicate rejects the input.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("{field} should not be blank!")]
pub struct InvalidFieldError {
    field: &'static str,
}

impl InvalidFieldError {
    pub(crate) const fn new(field: &'static str) -> Self {
        Self { field }
    }

    /// The display name of the field that rejected its input.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        self.field
    }
}

/// Defines an immutable wrapper over a trimmed, non-blank string.
///
/// The wrapped value is validated once at construction; equality and hashing
/// follow the wrapped value.
macro_rules! non_blank_field {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(NonEmptyString);

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.as_str().hash(state);
            }
        }

        impl $name {
            /// Creates a new value from the given string, trimming
            /// surrounding whitespace.
            ///
            /// # Errors
            ///
            /// Returns [`InvalidFieldError`] if the trimmed input is empty.
            pub fn new(value: &str) -> Result<Self, InvalidFieldError> {
                let trimmed = value.trim();
                NonEmptyString::new(trimmed.to_string())
                    .map(Self)
                    .map_err(|_| InvalidFieldError::new($label))
            }

            /// Returns the wrapped string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidFieldError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                self.0.as_str()
            }
        }
    };
}

non_blank_field!(
    /// The name of the company offering the internship.
    CompanyName,
    "Company name"
);

non_blank_field!(
    /// A short description of the internship.
    Description,
    "Description"
);

non_blank_field!(
    /// The name of the point of contact for the application.
    ContactName,
    "Contact name"
);

non_blank_field!(
    /// The email address of the point of contact.
    ///
    /// The address is free text; it is not checked against an address
    /// grammar.
    ContactEmail,
    "Contact email"
);

non_blank_field!(
    /// The phone number of the point of contact. Free text.
    ContactNumber,
    "Contact number"
);

non_blank_field!(
    /// Where the internship is based.
    Location,
    "Location"
);

non_blank_field!(
    /// The role applied for.
    Role,
    "Role"
);

non_blank_field!(
    /// The current status of the application (e.g. "Applied", "Interview").
    ApplicationStatus,
    "Application status"
);

non_blank_field!(
    /// A task's deadline.
    ///
    /// Deadlines are free text and are never semantically parsed; they order
    /// by their raw textual value.
    Deadline,
    "Deadline"
);

/// A free-text remark on an internship record.
///
/// Unlike the other field types, a remark has no validity constraint: any
/// string is accepted, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Remark(String);

impl Remark {
    /// Creates a remark, trimming surrounding whitespace.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self(value.trim().to_string())
    }

    /// Returns the wrapped string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the remark is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Remark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Remark {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
