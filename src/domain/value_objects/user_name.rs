//! User name value object.

use std::fmt;

use serde::Serialize;

use super::IdentityError;

/// Maximum user name length in characters.
pub const USER_NAME_MAX_LENGTH: usize = 32;

/// A validated, human-chosen account handle.
///
/// Only ASCII letters and digits are accepted, 1 to 32 of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Validate raw input as a user name.
    pub fn parse(raw: &str) -> Result<Self, IdentityError> {
        let valid = !raw.is_empty()
            && raw.len() <= USER_NAME_MAX_LENGTH
            && raw.bytes().all(|b| b.is_ascii_alphanumeric());

        if !valid {
            return Err(IdentityError::InvalidUserName);
        }

        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for UserName {
    type Error = IdentityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
