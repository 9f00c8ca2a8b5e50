//! The locally persisted reflection journal.
//!
//! The journal is an ordered list of entries, newest first, stored as one JSON
//! array under a versioned key. Older schema versions used other keys; those are
//! read once at startup by [`JournalStore::migrate`] and removed on clear.
//!
//! Entries are immutable once created. The only mutations are prepending a new
//! entry and clearing everything.

pub mod storage;

use crate::constants::{LEGACY_STORAGE_KEYS, STORAGE_KEY};
use crate::errors::StorageError;
use crate::verse::VerseRecord;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use storage::KeyValueStore;
use tracing::{debug, info, warn};

/// One saved journal entry.
///
/// Field names on the wire are camelCase (`csvThemes`, `sourceType`, ...).
/// Missing or null fields read as empty strings, and a numeric `number` from
/// older payloads is accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JournalEntry {
    /// Creation timestamp, ISO 8601 UTC
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    /// Canonical journey number
    #[serde(deserialize_with = "lenient_string")]
    pub number: String,
    /// Verse reference
    #[serde(deserialize_with = "lenient_string")]
    pub reference: String,
    /// Verse text
    #[serde(deserialize_with = "lenient_string")]
    pub verse: String,
    /// Themes from the dataset
    #[serde(deserialize_with = "lenient_string")]
    pub csv_themes: String,
    /// Quick reflection from the dataset
    #[serde(deserialize_with = "lenient_string")]
    pub csv_quick: String,
    /// Extended reflection from the dataset
    #[serde(deserialize_with = "lenient_string")]
    pub csv_extended: String,
    /// Alignment note from the dataset
    #[serde(deserialize_with = "lenient_string")]
    pub csv_align: String,
    /// Prayer from the dataset
    #[serde(deserialize_with = "lenient_string")]
    pub csv_prayer: String,
    /// The user's own themes
    #[serde(deserialize_with = "lenient_string")]
    pub themes: String,
    /// The user's own reflection
    #[serde(deserialize_with = "lenient_string")]
    pub reflection: String,
    /// Where the number came from (e.g. "Manual", "Clock")
    #[serde(deserialize_with = "lenient_string")]
    pub source_type: String,
    /// Translation code, uppercased
    #[serde(deserialize_with = "lenient_string")]
    pub translation: String,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Null => String::new(),
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    })
}

/// User-authored parts of a new entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotations {
    /// The user's own themes
    pub themes: String,
    /// The user's own reflection
    pub reflection: String,
    /// Source tag
    pub source_type: String,
}

impl JournalEntry {
    /// Builds an entry from a resolved verse and the user's annotations.
    ///
    /// User text is trimmed and the translation code is uppercased.
    pub fn new(
        verse: &VerseRecord,
        annotations: &Annotations,
        translation: &str,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            date: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            number: verse.number.clone(),
            reference: verse.reference.trim().to_string(),
            verse: verse.text.trim().to_string(),
            csv_themes: verse.themes.clone(),
            csv_quick: verse.quick.clone(),
            csv_extended: verse.extended.clone(),
            csv_align: verse.align.clone(),
            csv_prayer: verse.prayer.clone(),
            themes: annotations.themes.trim().to_string(),
            reflection: annotations.reflection.trim().to_string(),
            source_type: annotations.source_type.trim().to_string(),
            translation: translation.trim().to_uppercase(),
        }
    }
}

/// A legacy payload selected for copying into the current key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Legacy key the payload came from
    pub source_key: String,
    /// Payload copied verbatim
    pub payload: String,
}

/// Decides whether a legacy payload should be copied into the current key.
///
/// Pure function: given the current payload and the legacy payloads in
/// precedence order, returns the first non-empty legacy payload, or `None` when
/// the current key already holds data or no legacy data exists. Payloads are
/// never merged or transformed.
///
/// # Examples
///
/// ```
/// use bible_journey::journal::plan_migration;
///
/// let legacy = [
///     ("bj_journal_v2", None),
///     ("bj_journal", Some("[{\"number\":\"7\"}]".to_string())),
/// ];
/// let plan = plan_migration(None, &legacy).unwrap();
/// assert_eq!(plan.source_key, "bj_journal");
///
/// assert!(plan_migration(Some("[]"), &legacy).is_none());
/// ```
pub fn plan_migration(
    current: Option<&str>,
    legacy: &[(&str, Option<String>)],
) -> Option<MigrationPlan> {
    if current.is_some_and(|payload| !payload.is_empty()) {
        return None;
    }

    legacy.iter().find_map(|(key, payload)| match payload {
        Some(payload) if !payload.is_empty() => Some(MigrationPlan {
            source_key: key.to_string(),
            payload: payload.clone(),
        }),
        _ => None,
    })
}

/// The journal, persisted through a key-value medium.
///
/// Methods prefixed with `try_` report storage failures. The others tolerate
/// them: reads degrade to an empty journal and failed writes leave only the
/// in-memory view, with a warning logged.
pub struct JournalStore<S> {
    storage: S,
    key: String,
    legacy_keys: Vec<String>,
}

impl<S: KeyValueStore> JournalStore<S> {
    /// Creates a store using the standard current and legacy keys.
    pub fn new(storage: S) -> Self {
        Self::with_keys(storage, STORAGE_KEY, LEGACY_STORAGE_KEYS)
    }

    /// Creates a store with explicit keys. `legacy_keys` are in precedence order.
    pub fn with_keys(storage: S, key: &str, legacy_keys: &[&str]) -> Self {
        Self {
            storage,
            key: key.to_string(),
            legacy_keys: legacy_keys.iter().map(|k| k.to_string()).collect(),
        }
    }

    /// The underlying storage medium.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Copies the newest legacy payload into the current key if it is absent.
    ///
    /// Returns the legacy key that was copied, if any.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if any key cannot be read or the copy cannot be written.
    pub fn try_migrate(&mut self) -> Result<Option<String>, StorageError> {
        let current = self.storage.get(&self.key)?;
        if current.as_deref().is_some_and(|payload| !payload.is_empty()) {
            debug!("Journal key {} present, no migration needed", self.key);
            return Ok(None);
        }

        let mut legacy = Vec::with_capacity(self.legacy_keys.len());
        for key in &self.legacy_keys {
            legacy.push((key.as_str(), self.storage.get(key)?));
        }

        match plan_migration(current.as_deref(), &legacy) {
            Some(plan) => {
                self.storage.set(&self.key, &plan.payload)?;
                info!("Migrated journal from {} to {}", plan.source_key, self.key);
                Ok(Some(plan.source_key))
            }
            None => Ok(None),
        }
    }

    /// Tolerant [`try_migrate`](Self::try_migrate).
    pub fn migrate(&mut self) -> Option<String> {
        self.try_migrate().unwrap_or_else(|e| {
            warn!("Journal migration skipped: {}", e);
            None
        })
    }

    /// Reads all entries, newest first.
    ///
    /// An absent key is an empty journal.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Unavailable` if the medium fails and
    /// `StorageError::Corrupt` if the payload is not a JSON array of entries.
    pub fn try_list(&self) -> Result<Vec<JournalEntry>, StorageError> {
        match self.storage.get(&self.key)? {
            Some(payload) if !payload.trim().is_empty() => serde_json::from_str(&payload)
                .map_err(|source| StorageError::Corrupt {
                    key: self.key.clone(),
                    source,
                }),
            _ => Ok(Vec::new()),
        }
    }

    /// Tolerant [`try_list`](Self::try_list): failures read as an empty journal.
    pub fn list(&self) -> Vec<JournalEntry> {
        self.try_list().unwrap_or_else(|e| {
            warn!("Reading journal failed, treating as empty: {}", e);
            Vec::new()
        })
    }

    /// Prepends `entry` and persists the full list.
    ///
    /// An unreadable existing journal is treated as empty, as in [`list`](Self::list).
    /// Returns the updated list.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` if the updated list cannot be written.
    pub fn try_append(&mut self, entry: JournalEntry) -> Result<Vec<JournalEntry>, StorageError> {
        let mut entries = self.list();
        entries.insert(0, entry);
        self.persist(&entries)?;
        Ok(entries)
    }

    /// Tolerant [`try_append`](Self::try_append): returns the in-memory list even
    /// when it could not be persisted.
    pub fn append(&mut self, entry: JournalEntry) -> Vec<JournalEntry> {
        let mut entries = self.list();
        entries.insert(0, entry);
        if let Err(e) = self.persist(&entries) {
            warn!("Journal entry kept in memory only: {}", e);
        }
        entries
    }

    /// Removes the current key and every legacy key.
    ///
    /// Legacy keys are removed too, so a later migration cannot bring cleared
    /// entries back. Every key is attempted even if an earlier removal fails.
    ///
    /// # Errors
    ///
    /// Returns the first `StorageError` encountered.
    pub fn try_clear(&mut self) -> Result<(), StorageError> {
        let mut first_error = None;
        let keys = std::iter::once(&self.key).chain(self.legacy_keys.iter());
        for key in keys {
            if let Err(e) = self.storage.remove(key) {
                if first_error.is_none() {
                    first_error = Some(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => {
                info!("Journal cleared");
                Ok(())
            }
        }
    }

    /// Tolerant [`try_clear`](Self::try_clear).
    pub fn clear(&mut self) {
        if let Err(e) = self.try_clear() {
            warn!("Clearing journal failed: {}", e);
        }
    }

    fn persist(&mut self, entries: &[JournalEntry]) -> Result<(), StorageError> {
        let payload = serde_json::to_string(entries).map_err(StorageError::Serialize)?;
        self.storage.set(&self.key, &payload)
    }
}
