//! Constants used throughout the application.
//!
//! This module contains all constants used in the Bible Journey application,
//! organized into logical groups. Having constants centralized makes them easier
//! to find, modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "bible-journey";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str =
    "Resolve journey numbers to Bible verses and keep a local reflection journal";

// CLI Arguments & Defaults
/// Log format identifier for plain text.
pub const LOG_FORMAT_TEXT: &str = "text";
/// Log format identifier for JSON.
pub const LOG_FORMAT_JSON: &str = "json";
/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";
/// Source tag recorded on journal entries when none is given.
pub const DEFAULT_SOURCE_TYPE: &str = "Manual";

// Configuration Keys & Environment Variables
/// Environment variable for the dataset source (base URL or directory).
pub const ENV_VAR_BJ_DATA: &str = "BJ_DATA";
/// Environment variable for the directory backing journal storage.
pub const ENV_VAR_BJ_DIR: &str = "BJ_DIR";
/// Environment variable for the dataset cache-busting version.
pub const ENV_VAR_BJ_ASSET_VERSION: &str = "BJ_ASSET_VERSION";
/// Environment variable for the default translation code.
pub const ENV_VAR_BJ_TRANSLATION: &str = "BJ_TRANSLATION";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory (under the home directory) for application state.
pub const DEFAULT_STATE_SUBDIR: &str = ".bible-journey";
/// Default sub-directory (under the state directory) for local datasets.
pub const DEFAULT_DATA_SUBDIR: &str = "data";
/// Cache-busting version appended to remote dataset requests.
pub const DEFAULT_ASSET_VERSION: &str = "build-9";
/// Translation used when none is selected or the selection is blank.
pub const DEFAULT_TRANSLATION: &str = "kjv";

// Journal Storage
/// Storage key holding the current journal schema.
pub const STORAGE_KEY: &str = "bj_journal_v3";
/// Older storage keys, newest first. Read only as migration sources.
pub const LEGACY_STORAGE_KEYS: &[&str] = &["bj_journal_v2", "bj_journal"];
/// File extension used by the file-backed key-value store.
pub const STORAGE_FILE_EXTENSION: &str = "json";
/// Lock file guarding writes to the file-backed key-value store.
pub const STORAGE_LOCK_FILENAME: &str = ".store.lock";

// Export
/// Byte-order marker prepended to CSV exports for spreadsheet compatibility.
pub const UTF8_BOM: &str = "\u{feff}";
/// Header row of the CSV export.
pub const CSV_EXPORT_HEADERS: &[&str] = &[
    "Date",
    "Number",
    "Reference",
    "Verse",
    "Themes",
    "Quick Reflection",
    "Extended Reflection",
    "Alignment",
    "Prayer",
    "My Themes",
    "My Reflection",
    "Source",
    "Translation",
];
/// Default file name for the CSV export.
pub const CSV_EXPORT_FILENAME: &str = "bible_journey_journal.csv";
/// Default file name for the plain-text export.
pub const TEXT_EXPORT_FILENAME: &str = "bible_journey_journal.txt";
/// Default file name for the selected-fields export.
pub const SELECTED_EXPORT_FILENAME: &str = "bible_journey_selected.txt";
/// Title line of the plain-text export.
pub const TEXT_EXPORT_TITLE: &str = "My Bible Journey Journal";
/// Local date format used in exports and listings.
pub const DISPLAY_DATE_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

// Status Messages
/// Shown by lookup when the entered number contains no digits.
pub const MSG_ENTER_DIGITS: &str = "Enter a number (digits only).";
/// Shown by save when the entered number contains no digits.
pub const MSG_ENTER_NUMBER_FIRST: &str = "Enter a number first.";
/// Shown when a matching record has no verse text.
pub const MSG_NO_VERSE_TEXT: &str = "No verse text found.";
/// Shown when saving is attempted without a resolvable verse.
pub const MSG_RESOLVE_FIRST: &str = "Resolve the number first (no verse text available).";
/// Shown after an entry is saved.
pub const MSG_SAVED: &str = "Saved to Journal (local on this device).";
/// Shown after the journal is cleared.
pub const MSG_CLEARED: &str = "Journal cleared on this device.";
/// Shown when clearing is declined at the prompt.
pub const MSG_CLEAR_CANCELLED: &str = "Journal left unchanged.";
/// Question asked before clearing the journal.
pub const CLEAR_CONFIRMATION_PROMPT: &str = "Clear every saved journal entry on this device?";
/// Shown when the journal is empty.
pub const MSG_NO_ENTRIES: &str = "No entries yet.";
/// Shown when a selected-fields export is requested on an empty journal.
pub const MSG_NOTHING_TO_SHARE: &str = "No entries to share yet - save one first.";

// Logging Configuration
/// Service name used in tracing spans and structured logs.
pub const TRACING_SERVICE_NAME: &str = "bible-journey";
/// Name for the root tracing span covering an application invocation.
pub const TRACING_ROOT_SPAN_NAME: &str = "app_invocation";
