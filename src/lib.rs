//! veridoc - A tamper-evident, single-document revision store
//!
//! A [`store::RevisionStore`] owns the document and its append-only history;
//! a client-side [`guard::IntegrityGuard`] caches the digest of the last
//! content it wrote and detects divergence by recomputing and comparing.
//! Recovery restores the previous revision from history.

pub mod cli;
pub mod digest;
pub mod guard;
pub mod http_server;
pub mod store;
