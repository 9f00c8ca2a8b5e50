//! Export formatters over a journal snapshot.
//!
//! Pure functions: each takes the entries (newest first) and returns the full
//! document text. Writing the text somewhere is the caller's concern.

use crate::constants::{CSV_EXPORT_HEADERS, DISPLAY_DATE_FORMAT, TEXT_EXPORT_TITLE, UTF8_BOM};
use crate::csv::quote_field;
use crate::journal::JournalEntry;
use chrono::{DateTime, Local};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Renders a stored ISO 8601 timestamp in local time.
///
/// Unparseable timestamps are returned unchanged.
pub fn display_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw.trim())
        .map(|date| date.with_timezone(&Local).format(DISPLAY_DATE_FORMAT).to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Title line for an entry: `<reference> — #<number> (<TRANSLATION>)`.
pub fn entry_title(entry: &JournalEntry) -> String {
    let reference = if entry.reference.is_empty() {
        "—"
    } else {
        entry.reference.as_str()
    };
    let mut title = format!("{} — #{}", reference, entry.number);
    if !entry.translation.is_empty() {
        title.push_str(&format!(" ({})", entry.translation));
    }
    title
}

/// Renders the journal as a spreadsheet-friendly CSV document.
///
/// The output starts with a UTF-8 byte-order marker, uses CRLF between rows
/// and quotes any value containing a comma, quote or line break.
pub fn to_csv(entries: &[JournalEntry]) -> String {
    let mut lines = Vec::with_capacity(entries.len() + 1);
    lines.push(CSV_EXPORT_HEADERS.join(","));

    for entry in entries {
        let date = display_date(&entry.date);
        let cells = [
            date.as_str(),
            &entry.number,
            &entry.reference,
            &entry.verse,
            &entry.csv_themes,
            &entry.csv_quick,
            &entry.csv_extended,
            &entry.csv_align,
            &entry.csv_prayer,
            &entry.themes,
            &entry.reflection,
            &entry.source_type,
            &entry.translation,
        ];
        lines.push(
            cells
                .iter()
                .map(|cell| quote_field(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    format!("{}{}", UTF8_BOM, lines.join("\r\n"))
}

/// Renders the journal as a plain-text transcript, one block per entry.
pub fn to_plain_text(entries: &[JournalEntry]) -> String {
    let mut lines: Vec<String> = vec![TEXT_EXPORT_TITLE.to_string(), String::new()];

    if entries.is_empty() {
        lines.push(
            "No entries yet. Use \"Save Entry\" in My Journal, then export again.".to_string(),
        );
    }

    for entry in entries {
        lines.push(entry_title(entry));
        lines.push(format!("Date: {}", display_date(&entry.date)));
        lines.push(format!("Verse: {}", entry.verse));
        lines.push(String::new());
        lines.push(format!("Themes: {}", entry.csv_themes));
        lines.push(format!("Quick Reflection: {}", entry.csv_quick));
        lines.push(format!("Extended Reflection: {}", entry.csv_extended));
        lines.push(format!("Alignment: {}", entry.csv_align));
        lines.push(format!("Prayer: {}", entry.csv_prayer));
        lines.push(String::new());
        lines.push(format!("My Themes: {}", entry.themes));
        lines.push(format!("My Reflection: {}", entry.reflection));
        lines.push(format!("Source: {}", entry.source_type));
        lines.push(format!("Translation: {}", entry.translation));
        lines.push(String::new());
    }

    lines.join("\n")
}

/// A field that can be picked for the selected-fields export.
///
/// Variants are declared in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExportField {
    Verse,
    Themes,
    Quick,
    Extended,
    Align,
    Prayer,
    MyThemes,
    MyReflection,
}

impl ExportField {
    /// Every field, in output order.
    pub const ALL: [ExportField; 8] = [
        ExportField::Verse,
        ExportField::Themes,
        ExportField::Quick,
        ExportField::Extended,
        ExportField::Align,
        ExportField::Prayer,
        ExportField::MyThemes,
        ExportField::MyReflection,
    ];

    /// Line label used in text exports.
    pub fn label(self) -> &'static str {
        match self {
            ExportField::Verse => "Verse",
            ExportField::Themes => "Themes",
            ExportField::Quick => "Quick Reflection",
            ExportField::Extended => "Extended Reflection",
            ExportField::Align => "Alignment",
            ExportField::Prayer => "Prayer",
            ExportField::MyThemes => "My Themes",
            ExportField::MyReflection => "My Reflection",
        }
    }

    /// The entry value this field selects.
    pub fn value(self, entry: &JournalEntry) -> &str {
        match self {
            ExportField::Verse => &entry.verse,
            ExportField::Themes => &entry.csv_themes,
            ExportField::Quick => &entry.csv_quick,
            ExportField::Extended => &entry.csv_extended,
            ExportField::Align => &entry.csv_align,
            ExportField::Prayer => &entry.csv_prayer,
            ExportField::MyThemes => &entry.themes,
            ExportField::MyReflection => &entry.reflection,
        }
    }
}

/// Error for a field token that names no export field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownField(pub String);

impl fmt::Display for UnknownField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown export field '{}'", self.0)
    }
}

impl std::error::Error for UnknownField {}

impl FromStr for ExportField {
    type Err = UnknownField;

    /// Parses a field token. Case and surrounding whitespace are ignored and
    /// the long label forms are accepted as synonyms.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token.trim().to_lowercase().as_str() {
            "verse" => Ok(ExportField::Verse),
            "themes" => Ok(ExportField::Themes),
            "quick" | "quick reflection" => Ok(ExportField::Quick),
            "extended" | "extended reflection" => Ok(ExportField::Extended),
            "align" | "alignment" => Ok(ExportField::Align),
            "prayer" => Ok(ExportField::Prayer),
            "mythemes" | "my themes" => Ok(ExportField::MyThemes),
            "myreflection" | "my reflection" => Ok(ExportField::MyReflection),
            _ => Err(UnknownField(token.to_string())),
        }
    }
}

/// The set of fields included by the selected-fields export.
///
/// A selection built from no tokens at all means every field; otherwise only
/// the named fields are included, possibly none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSelection {
    fields: BTreeSet<ExportField>,
    restricted: bool,
}

impl FieldSelection {
    /// Selects every field.
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a selection from user tokens.
    ///
    /// Unknown tokens select nothing. Only an empty token list selects
    /// everything.
    ///
    /// # Examples
    ///
    /// ```
    /// use bible_journey::export::{ExportField, FieldSelection};
    ///
    /// let selection = FieldSelection::from_tokens(["Alignment", "align", "My Reflection"]);
    /// assert_eq!(selection.fields(), vec![ExportField::Align, ExportField::MyReflection]);
    /// ```
    pub fn from_tokens<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut selection = Self::default();
        for token in tokens {
            selection.restricted = true;
            if let Ok(field) = token.as_ref().parse() {
                selection.fields.insert(field);
            }
        }
        selection
    }

    /// True when `field` is included.
    pub fn includes(&self, field: ExportField) -> bool {
        !self.restricted || self.fields.contains(&field)
    }

    /// Included fields in output order.
    pub fn fields(&self) -> Vec<ExportField> {
        ExportField::ALL
            .into_iter()
            .filter(|field| self.includes(*field))
            .collect()
    }
}

impl FromIterator<ExportField> for FieldSelection {
    fn from_iter<I: IntoIterator<Item = ExportField>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
            restricted: true,
        }
    }
}

/// Renders the chosen fields of every entry as shareable plain text.
///
/// Each block holds the entry title, its date, the selected fields in fixed
/// order and a trailing blank line.
pub fn to_selected_text(entries: &[JournalEntry], selection: &FieldSelection) -> String {
    let fields = selection.fields();
    entries
        .iter()
        .map(|entry| {
            let mut lines = vec![
                entry_title(entry),
                format!("Date: {}", display_date(&entry.date)),
            ];
            lines.extend(
                fields
                    .iter()
                    .map(|field| format!("{}: {}", field.label(), field.value(entry))),
            );
            lines.push(String::new());
            lines.join("\n")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
