//! Conversion of tokenized raw strings into validated field values.
//!
//! The required parsers trim and validate; the optional parsers substitute a
//! fixed sentinel default only when the argument is entirely absent. A prefix
//! that is present with a blank value is a validation failure, never a
//! fallback to the default.

use std::num::NonZeroUsize;

use super::ParseError;
use crate::{
    domain::{
        ApplicationStatus, CompanyName, ContactEmail, ContactName, ContactNumber, Deadline,
        Description, Location, Remark, Role, SortOrder,
    },
    logic::commands::Index,
};

/// Sentinel role for records added without a role.
pub(crate) const DEFAULT_ROLE: &str = "Unknown Role";
/// Sentinel location for records added without a location.
pub(crate) const DEFAULT_LOCATION: &str = "UNKNOWN";
/// Sentinel contact name for records added without one.
pub(crate) const DEFAULT_CONTACT_NAME: &str = "Unknown Contact Name";
/// Sentinel contact email for records added without one.
pub(crate) const DEFAULT_CONTACT_EMAIL: &str = "Unknown Contact Email";
/// Sentinel contact number for records added without one.
pub(crate) const DEFAULT_CONTACT_NUMBER: &str = "Unknown Contact Number";

pub(crate) fn parse_company_name(raw: &str) -> Result<CompanyName, ParseError> {
    CompanyName::new(raw).map_err(ParseError::from)
}

pub(crate) fn parse_description(raw: &str) -> Result<Description, ParseError> {
    Description::new(raw).map_err(ParseError::from)
}

pub(crate) fn parse_status(raw: &str) -> Result<ApplicationStatus, ParseError> {
    ApplicationStatus::new(raw).map_err(ParseError::from)
}

pub(crate) fn parse_optional_contact_name(raw: Option<&str>) -> Result<ContactName, ParseError> {
    raw.map_or_else(
        || Ok(ContactName::new(DEFAULT_CONTACT_NAME).expect("default contact name is not blank")),
        |value| ContactName::new(value).map_err(ParseError::from),
    )
}

pub(crate) fn parse_optional_contact_email(raw: Option<&str>) -> Result<ContactEmail, ParseError> {
    raw.map_or_else(
        || Ok(ContactEmail::new(DEFAULT_CONTACT_EMAIL).expect("default contact email is not blank")),
        |value| ContactEmail::new(value).map_err(ParseError::from),
    )
}

pub(crate) fn parse_optional_contact_number(
    raw: Option<&str>,
) -> Result<ContactNumber, ParseError> {
    raw.map_or_else(
        || {
            Ok(ContactNumber::new(DEFAULT_CONTACT_NUMBER)
                .expect("default contact number is not blank"))
        },
        |value| ContactNumber::new(value).map_err(ParseError::from),
    )
}

pub(crate) fn parse_optional_location(raw: Option<&str>) -> Result<Location, ParseError> {
    raw.map_or_else(
        || Ok(Location::new(DEFAULT_LOCATION).expect("default location is not blank")),
        |value| Location::new(value).map_err(ParseError::from),
    )
}

pub(crate) fn parse_optional_role(raw: Option<&str>) -> Result<Role, ParseError> {
    raw.map_or_else(
        || Ok(Role::new(DEFAULT_ROLE).expect("default role is not blank")),
        |value| Role::new(value).map_err(ParseError::from),
    )
}

pub(crate) fn parse_remark(raw: &str) -> Remark {
    Remark::new(raw)
}

pub(crate) fn parse_deadline(raw: &str) -> Result<Deadline, ParseError> {
    Deadline::new(raw).map_err(ParseError::from)
}

/// Parses a one-based positional index token.
///
/// The trimmed token must consist solely of ASCII digits and denote a
/// non-zero integer; signs, fractions and anything else are rejected.
pub(crate) fn parse_index(raw: &str) -> Result<Index, ParseError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    let index: NonZeroUsize = trimmed.parse().map_err(|_| ParseError::InvalidIndex)?;
    Ok(Index::from_one_based(index))
}

/// Parses a sort direction token.
pub(crate) fn parse_order(raw: &str) -> Result<SortOrder, ParseError> {
    SortOrder::from_token(raw.trim()).ok_or(ParseError::InvalidOrder)
}
