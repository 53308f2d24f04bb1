//! # Integrity Guard
//!
//! Client-side tamper detection over a single cached trusted digest.
//!
//! The guard holds at most one digest, believed to correspond to the last
//! content its owner wrote. Verification recomputes the digest of whatever
//! content the owner currently holds and compares it to the cached claim;
//! disagreement is the designed positive signal, surfaced as data rather
//! than an error. Recovery selects a prior revision from an already-fetched
//! history.

mod integrity;
mod recovery;
mod session;

pub use integrity::{IntegrityGuard, Verification};
pub use recovery::recover;
pub use session::DocumentSession;
