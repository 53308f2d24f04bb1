//! In-memory revision store with serialized appends

use std::sync::Mutex;

use super::revision::Revision;

/// Default seed content for a freshly constructed store.
pub(crate) const DEFAULT_SEED: &[u8] = b"Hello World";

/// Authoritative owner of the document and its append-only history.
///
/// Interior mutability: callers share the store behind an `Arc` and every
/// operation takes `&self`. The read-len / assign-sequence / push section of
/// [`append`](RevisionStore::append) runs inside the lock, so sequences are
/// strictly increasing with no gaps or duplicates under concurrent writers.
/// Reads observe either the pre- or post-append state, never a partial one.
pub struct RevisionStore {
    history: Mutex<Vec<Revision>>,
}

impl RevisionStore {
    /// Creates a store seeded with the default content.
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED.to_vec())
    }

    /// Creates a store seeded with the given content.
    ///
    /// The seed becomes revision 0, its digest computed over the seed bytes.
    pub fn with_seed(seed: Vec<u8>) -> Self {
        Self {
            history: Mutex::new(vec![Revision::new(seed, 0)]),
        }
    }

    /// Returns the current (most recently appended) revision.
    ///
    /// No side effects. Infallible: the store always holds at least the seed.
    pub fn read(&self) -> Revision {
        let history = self.history.lock().unwrap();
        history
            .last()
            .cloned()
            .expect("history holds at least the seed revision")
    }

    /// Appends new content as the next revision and returns it.
    ///
    /// The digest is computed server-side from the raw bytes; the sequence is
    /// assigned from the history length inside the critical section.
    pub fn append(&self, content: Vec<u8>) -> Revision {
        let mut history = self.history.lock().unwrap();
        let revision = Revision::new(content, history.len() as u64);
        history.push(revision.clone());
        revision
    }

    /// Returns every revision, oldest first.
    ///
    /// The returned vector is a consistent snapshot; later appends do not
    /// affect it.
    pub fn read_history(&self) -> Vec<Revision> {
        self.history.lock().unwrap().clone()
    }

    /// Number of revisions currently in history. Never less than 1: the
    /// seed revision is never removed.
    pub fn len(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Default for RevisionStore {
    fn default() -> Self {
        Self::new()
    }
}
