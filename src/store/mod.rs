//! # Revision Store
//!
//! Server-side owner of the document and its append-only revision history.
//!
//! The store is the single writer: every `append` computes the digest
//! server-side, assigns the next sequence number under a lock, and pushes an
//! immutable [`Revision`]. History is never reordered or truncated.
//!
//! History grows without bound. A production deployment must cap or
//! externalize history growth at the boundary; the core keeps the
//! append-only invariant unconditional.

mod revision;
mod revision_store;

pub use revision::Revision;
pub use revision_store::RevisionStore;
