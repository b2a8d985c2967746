//! Password Hashing
//!
//! bcrypt with a configurable work factor. Every hash gets a fresh random
//! salt, so the same password never produces the same stored hash twice.

use crate::domain::{HashedPassword, RawPassword};

/// Fixed input for the timing-equalisation hash. Never a valid account password
/// in practice, and never compared for its result.
const DUMMY_PASSWORD: &[u8] = b"dummy!password#for$timing";

/// Password hashing errors
#[derive(Debug, thiserror::Error)]
pub enum HashingError {
    #[error("bcrypt failed: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    #[error("hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// One-way password hasher.
///
/// Cheap to clone; clones share nothing mutable.
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
    dummy_hash: HashedPassword,
}

impl PasswordHasher {
    /// Create a hasher with the given bcrypt cost.
    ///
    /// Computes one hash up front, which also rejects a cost bcrypt does not
    /// accept.
    pub fn new(cost: u32) -> Result<Self, HashingError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)?.into();
        Ok(Self { cost, dummy_hash })
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a new random salt.
    pub fn hash(&self, password: &RawPassword) -> Result<HashedPassword, HashingError> {
        let hash = bcrypt::hash(password.expose(), self.cost)?;
        Ok(HashedPassword::from(hash))
    }

    /// Check a candidate password against a stored hash.
    ///
    /// The candidate is hashed with the salt and cost embedded in `hash` and
    /// compared in constant time by bcrypt. A malformed stored hash is
    /// reported as a plain mismatch.
    pub fn verify(&self, hash: &HashedPassword, candidate: &RawPassword) -> bool {
        let Ok(hash) = std::str::from_utf8(hash.as_bytes()) else {
            return false;
        };

        bcrypt::verify(candidate.expose(), hash).unwrap_or(false)
    }

    /// Spend the same bcrypt work as `verify` without a real stored hash.
    pub fn verify_dummy(&self, candidate: &RawPassword) {
        let _ = self.verify(&self.dummy_hash, candidate);
    }

    /// `hash` on the blocking thread pool.
    pub async fn hash_blocking(
        &self,
        password: RawPassword,
    ) -> Result<HashedPassword, HashingError> {
        let hasher = self.clone();
        run_blocking(move || hasher.hash(&password)).await?
    }

    /// `verify` on the blocking thread pool.
    ///
    /// Only a failed task is an error; a wrong password or a malformed stored
    /// hash is `Ok(false)`.
    pub async fn verify_blocking(
        &self,
        hash: HashedPassword,
        candidate: RawPassword,
    ) -> Result<bool, HashingError> {
        let hasher = self.clone();
        run_blocking(move || hasher.verify(&hash, &candidate)).await
    }

    /// `verify_dummy` on the blocking thread pool.
    pub async fn verify_dummy_blocking(&self, candidate: RawPassword) -> Result<(), HashingError> {
        let hasher = self.clone();
        run_blocking(move || hasher.verify_dummy(&candidate)).await
    }
}

/// Run CPU-bound bcrypt work off the async workers.
async fn run_blocking<T, F>(work: F) -> Result<T, HashingError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(work).await?)
}

impl std::fmt::Debug for PasswordHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordHasher")
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}
