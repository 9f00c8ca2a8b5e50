//! Lookup operation: resolve a journey number and describe the result.

use crate::constants::{MSG_ENTER_DIGITS, MSG_NO_VERSE_TEXT};
use crate::dataset::ResourceFetcher;
use crate::errors::{AppError, AppResult};
use crate::verse::{VerseRecord, VerseResolver};
use tracing::debug;

/// Terminal state of a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A matching record with verse text.
    Resolved(VerseRecord),
    /// A matching record whose verse text is empty.
    NoText(VerseRecord),
    /// No record matches; carries the not-found sentinel.
    NotFound(VerseRecord),
    /// The entered number has no digits.
    InvalidInput,
}

impl LookupOutcome {
    /// The record to display, if any.
    pub fn verse(&self) -> Option<&VerseRecord> {
        match self {
            LookupOutcome::Resolved(verse)
            | LookupOutcome::NoText(verse)
            | LookupOutcome::NotFound(verse) => Some(verse),
            LookupOutcome::InvalidInput => None,
        }
    }

    /// Status line accompanying the outcome, if any.
    pub fn status(&self) -> Option<&'static str> {
        match self {
            LookupOutcome::InvalidInput => Some(MSG_ENTER_DIGITS),
            LookupOutcome::NoText(_) => Some(MSG_NO_VERSE_TEXT),
            _ => None,
        }
    }
}

/// Resolves `number` in `translation` and classifies the result.
///
/// Invalid input is recovered here and never surfaces as an error.
///
/// # Errors
///
/// Returns `AppError::Dataset` if the translation dataset cannot be loaded.
pub fn lookup_verse<F: ResourceFetcher>(
    resolver: &mut VerseResolver<F>,
    number: &str,
    translation: &str,
) -> AppResult<LookupOutcome> {
    match resolver.resolve(number, translation) {
        Ok(verse) if !verse.is_found() => Ok(LookupOutcome::NotFound(verse)),
        Ok(verse) if !verse.has_text() => Ok(LookupOutcome::NoText(verse)),
        Ok(verse) => Ok(LookupOutcome::Resolved(verse)),
        Err(AppError::InputInvalid(reason)) => {
            debug!("Lookup rejected: {}", reason);
            Ok(LookupOutcome::InvalidInput)
        }
        Err(e) => Err(e),
    }
}

/// Formats a verse record for the terminal.
pub fn render_verse(verse: &VerseRecord, translation: &str) -> String {
    let mut lines = vec![
        format!(
            "{} — #{} ({})",
            verse.reference,
            verse.number,
            translation.trim().to_uppercase()
        ),
        format!("Verse: {}", verse.text),
    ];

    if verse.is_found() {
        lines.push(format!("Themes: {}", verse.themes));
        lines.push(format!("Quick Reflection: {}", verse.quick));
        lines.push(format!("Extended Reflection: {}", verse.extended));
        lines.push(format!("Alignment: {}", verse.align));
        lines.push(format!("Prayer: {}", verse.prayer));
    }

    lines.join("\n")
}
