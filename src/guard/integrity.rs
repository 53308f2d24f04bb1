//! Trusted-digest slot and verification

use crate::digest::Digest;

/// Outcome of a verification check.
///
/// `Tampered` is data, not an error: it is the signal this subsystem exists
/// to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    /// Recomputed digest matches the trusted digest.
    Verified,
    /// Recomputed digest disagrees, or no trusted digest is held.
    Tampered,
}

/// Holder of the single cached trusted digest.
///
/// State machine over the slot: `Empty -> Holding(d)` via [`commit`],
/// `Holding(d) -> Holding(d')` via [`commit`], `Holding(d) -> Empty` via
/// [`forget`]. [`verify`] never transitions state.
///
/// The slot is single-owner. A session sharing its guard across threads must
/// wrap it the same way the store wraps its head pointer.
///
/// [`commit`]: IntegrityGuard::commit
/// [`forget`]: IntegrityGuard::forget
/// [`verify`]: IntegrityGuard::verify
#[derive(Debug, Default)]
pub struct IntegrityGuard {
    trusted: Option<Digest>,
}

impl IntegrityGuard {
    /// Creates a guard with an empty slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the digest of `content` and compares it to the trusted
    /// digest.
    ///
    /// Pure function of the slot and the input; no side effects. An empty
    /// slot fails closed: nothing can be verified against it, so the result
    /// is `Tampered`.
    pub fn verify(&self, content: &[u8]) -> Verification {
        match &self.trusted {
            Some(trusted) if Digest::compute(content) == *trusted => Verification::Verified,
            _ => Verification::Tampered,
        }
    }

    /// Overwrites the slot with a digest returned by the store.
    ///
    /// Call only with the digest the store returned for an append of the
    /// exact content being trusted, never one computed independently here.
    pub fn commit(&mut self, digest: Digest) {
        self.trusted = Some(digest);
    }

    /// Clears the slot, returning the guard to an unverifiable state.
    pub fn forget(&mut self) {
        self.trusted = None;
    }

    /// The currently trusted digest, if any.
    pub fn trusted(&self) -> Option<&Digest> {
        self.trusted.as_ref()
    }
}
