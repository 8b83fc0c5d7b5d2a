use std::fmt;

/// A literal marker token introducing one field's argument text in a command
/// line, e.g. `c/` for the company name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    /// The literal marker, including its trailing slash.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Company name.
pub const PREFIX_COMPANY: Prefix = Prefix("c/");
/// Contact name.
pub const PREFIX_CONTACT_NAME: Prefix = Prefix("cn/");
/// Contact number.
pub const PREFIX_CONTACT_NUMBER: Prefix = Prefix("cp/");
/// Contact email.
pub const PREFIX_CONTACT_EMAIL: Prefix = Prefix("ce/");
/// Application status.
pub const PREFIX_STATUS: Prefix = Prefix("s/");
/// Location.
pub const PREFIX_LOCATION: Prefix = Prefix("l/");
/// Role.
pub const PREFIX_ROLE: Prefix = Prefix("r/");
/// Remark.
pub const PREFIX_REMARK: Prefix = Prefix("re/");
/// Description.
pub const PREFIX_DESCRIPTION: Prefix = Prefix("d/");
/// Task body.
pub const PREFIX_TASK: Prefix = Prefix("t/");
/// Task deadline.
pub const PREFIX_DEADLINE: Prefix = Prefix("dl/");
