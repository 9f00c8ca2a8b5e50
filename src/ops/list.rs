//! List operation: show saved entries, newest first.

use crate::constants::MSG_NO_ENTRIES;
use crate::export::{to_selected_text, ExportField, FieldSelection};
use crate::journal::storage::KeyValueStore;
use crate::journal::{JournalEntry, JournalStore};

/// Reads the journal, treating an unreadable medium as empty.
pub fn list_entries<S: KeyValueStore>(store: &JournalStore<S>) -> Vec<JournalEntry> {
    store.list()
}

/// Formats entries for the terminal: title, date, verse and the user's notes.
pub fn render_entries(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return MSG_NO_ENTRIES.to_string();
    }

    let selection: FieldSelection = [
        ExportField::Verse,
        ExportField::MyThemes,
        ExportField::MyReflection,
    ]
    .into_iter()
    .collect();
    to_selected_text(entries, &selection)
}
