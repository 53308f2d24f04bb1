//! Client session driving a store handle
//!
//! Owns the working copy of the document and the integrity guard, and runs
//! the end-to-end flow: fetch current content, mutate and append it, record
//! the store-returned digest, verify at any time, and restore a prior
//! revision from history.

use std::sync::Arc;

use crate::digest::Digest;
use crate::store::{Revision, RevisionStore};

use super::integrity::{IntegrityGuard, Verification};
use super::recovery::recover;

/// One client's working state against a revision store.
///
/// The working content is a local copy; mutating it without going through
/// [`update`](DocumentSession::update) is exactly the divergence
/// [`verify`](DocumentSession::verify) detects.
pub struct DocumentSession {
    store: Arc<RevisionStore>,
    content: Vec<u8>,
    guard: IntegrityGuard,
}

impl DocumentSession {
    /// Opens a session against the store and fetches the current content.
    ///
    /// The guard starts empty: nothing is trusted until the session itself
    /// writes.
    pub fn open(store: Arc<RevisionStore>) -> Self {
        let mut session = Self {
            store,
            content: Vec::new(),
            guard: IntegrityGuard::new(),
        };
        session.fetch();
        session
    }

    /// The session's working copy of the document.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Replaces the working copy with the store's current content.
    ///
    /// Does not touch the trusted digest: fetching is not trusting.
    pub fn fetch(&mut self) {
        self.content = self.store.read().content;
    }

    /// Appends `content` to the store and trusts the digest it returns.
    ///
    /// The committed digest is the store's, for that exact append, never one
    /// computed locally. Returns the appended revision.
    pub fn update(&mut self, content: Vec<u8>) -> Revision {
        let revision = self.store.append(content);
        self.guard.commit(revision.digest);
        self.content = revision.content.clone();
        revision
    }

    /// Checks the working copy against the trusted digest.
    pub fn verify(&self) -> Verification {
        self.guard.verify(&self.content)
    }

    /// Restores the previous revision from the store's history.
    ///
    /// On success the working copy becomes the recovered content and its
    /// digest becomes the trusted digest, treating recovery as
    /// re-synchronizing with a known-good point. Returns `None` when the
    /// history is too short to recover from.
    pub fn recover(&mut self) -> Option<Revision> {
        let history = self.store.read_history();
        let revision = recover(&history)?.clone();
        self.content = revision.content.clone();
        self.guard.commit(revision.digest);
        Some(revision)
    }

    /// Overwrites the working copy without appending or committing.
    ///
    /// This is the out-of-band local edit path, the mutation verification
    /// exists to catch.
    pub fn set_content(&mut self, content: Vec<u8>) {
        self.content = content;
    }

    /// Clears the working copy and forgets the trusted digest.
    pub fn reset(&mut self) {
        self.content.clear();
        self.guard.forget();
    }

    /// The currently trusted digest, if any.
    pub fn trusted_digest(&self) -> Option<&Digest> {
        self.guard.trusted()
    }
}
