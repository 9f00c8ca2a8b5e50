//! Export operation: render the journal and write the document.

use crate::constants::{CSV_EXPORT_FILENAME, SELECTED_EXPORT_FILENAME, TEXT_EXPORT_FILENAME};
use crate::errors::AppResult;
use crate::export::{to_csv, to_plain_text, to_selected_text, FieldSelection};
use crate::journal::storage::KeyValueStore;
use crate::journal::JournalStore;
use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Export document kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Spreadsheet-friendly CSV
    Csv,
    /// Full plain-text transcript
    Text,
    /// Plain text with only the chosen fields
    Selected,
}

impl ExportFormat {
    /// File name used when the output target is a directory.
    pub fn default_file_name(self) -> &'static str {
        match self {
            ExportFormat::Csv => CSV_EXPORT_FILENAME,
            ExportFormat::Text => TEXT_EXPORT_FILENAME,
            ExportFormat::Selected => SELECTED_EXPORT_FILENAME,
        }
    }
}

/// Result of rendering an export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The rendered document.
    Document(String),
    /// A selected-fields export was requested on an empty journal.
    NothingToShare,
}

/// Renders the journal in `format`.
///
/// CSV and plain-text exports of an empty journal still produce a document
/// (header only, or the empty-journal notice).
pub fn export_journal<S: KeyValueStore>(
    store: &JournalStore<S>,
    format: ExportFormat,
    selection: &FieldSelection,
) -> ExportOutcome {
    let entries = store.list();
    match format {
        ExportFormat::Csv => ExportOutcome::Document(to_csv(&entries)),
        ExportFormat::Text => ExportOutcome::Document(to_plain_text(&entries)),
        ExportFormat::Selected if entries.is_empty() => ExportOutcome::NothingToShare,
        ExportFormat::Selected => ExportOutcome::Document(to_selected_text(&entries, selection)),
    }
}

/// Writes `document` to `target`, returning the path written.
///
/// When `target` is an existing directory the format's default file name is
/// used inside it.
///
/// # Errors
///
/// Returns `AppError::Io` if the file cannot be written.
pub fn write_document(document: &str, target: &Path, format: ExportFormat) -> AppResult<PathBuf> {
    let path = if target.is_dir() {
        target.join(format.default_file_name())
    } else {
        target.to_path_buf()
    };

    fs::write(&path, document)?;
    info!("Wrote {:?} export ({} bytes) to {:?}", format, document.len(), path);
    Ok(path)
}
