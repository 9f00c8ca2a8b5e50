//! Clear operation: remove every saved entry after confirmation.

use crate::journal::storage::KeyValueStore;
use crate::journal::JournalStore;
use tracing::debug;

/// Clears the journal if `confirm` agrees. Returns whether it was cleared.
///
/// Current and legacy keys are removed together. Storage failures are logged
/// and otherwise tolerated.
pub fn clear_journal<S, C>(store: &mut JournalStore<S>, confirm: C) -> bool
where
    S: KeyValueStore,
    C: FnOnce() -> bool,
{
    if !confirm() {
        debug!("Clear declined");
        return false;
    }

    store.clear();
    true
}
