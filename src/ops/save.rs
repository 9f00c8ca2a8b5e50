//! Save operation: resolve a number and prepend a journal entry.

use crate::constants::{DEFAULT_SOURCE_TYPE, MSG_ENTER_NUMBER_FIRST, MSG_RESOLVE_FIRST, MSG_SAVED};
use crate::dataset::ResourceFetcher;
use crate::errors::{AppError, AppResult};
use crate::journal::storage::KeyValueStore;
use crate::journal::{Annotations, JournalEntry, JournalStore};
use crate::verse::VerseResolver;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Terminal state of a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The entry was prepended to the journal.
    Saved(JournalEntry),
    /// The entered number has no digits.
    InvalidInput,
    /// The number resolved to the not-found sentinel or to empty verse text.
    Unresolved,
}

impl SaveOutcome {
    /// Status line for the outcome.
    pub fn message(&self) -> &'static str {
        match self {
            SaveOutcome::Saved(_) => MSG_SAVED,
            SaveOutcome::InvalidInput => MSG_ENTER_NUMBER_FIRST,
            SaveOutcome::Unresolved => MSG_RESOLVE_FIRST,
        }
    }
}

/// Resolves `number` and saves it with the user's annotations.
///
/// A blank source tag is recorded as `Manual`. Storage failures while saving
/// are tolerated by the journal store: the entry is kept for this session only
/// and a warning is logged.
///
/// # Errors
///
/// Returns `AppError::Dataset` if the translation dataset cannot be loaded.
pub fn save_entry<F, S>(
    resolver: &mut VerseResolver<F>,
    store: &mut JournalStore<S>,
    number: &str,
    translation: &str,
    annotations: &Annotations,
    created_at: DateTime<Utc>,
) -> AppResult<SaveOutcome>
where
    F: ResourceFetcher,
    S: KeyValueStore,
{
    let verse = match resolver.resolve(number, translation) {
        Ok(verse) => verse,
        Err(AppError::InputInvalid(reason)) => {
            debug!("Save rejected: {}", reason);
            return Ok(SaveOutcome::InvalidInput);
        }
        Err(e) => return Err(e),
    };

    if !verse.has_text() {
        debug!("Save refused for #{}: no verse text", verse.number);
        return Ok(SaveOutcome::Unresolved);
    }

    let mut annotations = annotations.clone();
    if annotations.source_type.trim().is_empty() {
        annotations.source_type = DEFAULT_SOURCE_TYPE.to_string();
    }

    let entry = JournalEntry::new(&verse, &annotations, translation, created_at);
    let entries = store.append(entry.clone());
    info!(
        "Saved #{} ({}) to journal; {} entries",
        entry.number,
        entry.translation,
        entries.len()
    );
    Ok(SaveOutcome::Saved(entry))
}
