//! Fixed-offset recovery over fetched history

use crate::store::Revision;

/// Selects the "previous" revision to restore from a fetched history.
///
/// The policy is a fixed offset: always `history[len - 2]`, one step back
/// from the current head, regardless of how many tampering events occurred
/// since the last commit. It is not "last known-good": after two
/// tamper-without-commit cycles the selected entry may itself postdate the
/// last verified state.
///
/// Returns `None` when fewer than two revisions exist; that is the
/// "nothing to recover" outcome, for the caller to surface as data.
pub fn recover(history: &[Revision]) -> Option<&Revision> {
    if history.len() < 2 {
        return None;
    }
    history.get(history.len() - 2)
}
