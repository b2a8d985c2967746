//! Password value objects.
//!
//! `RawPassword` is the plaintext a client submitted and only lives for the
//! duration of a request. `HashedPassword` is the bcrypt output the account
//! repository stores. Neither type prints its contents through `Debug`.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::IdentityError;

/// Minimum password length in bytes.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Maximum password length in bytes.
///
/// bcrypt only reads the first 72 bytes of its input, so longer passwords
/// are rejected instead of being silently truncated.
pub const PASSWORD_MAX_LENGTH: usize = 72;

/// Punctuation accepted in passwords in addition to ASCII letters and digits.
pub const PASSWORD_SYMBOLS: &[u8] = b"!@#$%^&*";

/// A validated plaintext password.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawPassword(Vec<u8>);

impl RawPassword {
    /// Validate raw bytes as a password.
    pub fn parse(raw: &[u8]) -> Result<Self, IdentityError> {
        let valid = (PASSWORD_MIN_LENGTH..=PASSWORD_MAX_LENGTH).contains(&raw.len())
            && raw
                .iter()
                .all(|b| b.is_ascii_alphanumeric() || PASSWORD_SYMBOLS.contains(b));

        if !valid {
            return Err(IdentityError::InvalidPassword);
        }

        Ok(Self(raw.to_vec()))
    }

    /// Plaintext bytes, for the password hasher only.
    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPassword(<redacted>)")
    }
}

/// A salted one-way password hash in bcrypt's modular crypt format.
///
/// There is deliberately no `PartialEq`: hashes are only ever checked with
/// `PasswordHasher::verify`.
#[derive(Clone)]
pub struct HashedPassword(Vec<u8>);

impl HashedPassword {
    /// Wrap hash bytes loaded from storage.
    ///
    /// The bytes are not validated here; a malformed hash simply never verifies.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<String> for HashedPassword {
    fn from(hash: String) -> Self {
        Self(hash.into_bytes())
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(<redacted>)")
    }
}
