//! Journey number normalization and verse resolution.
//!
//! A journey number is resolved against a translation dataset by comparing
//! normalized number strings. Semantic fields are extracted through ordered
//! lists of candidate column names, since different translation files populate
//! different text columns.

use crate::dataset::{Dataset, DatasetLoader, Record, ResourceFetcher};
use crate::errors::{AppError, AppResult};
use tracing::debug;

/// Reference shown when no record matches.
pub const NOT_FOUND_REFERENCE: &str = "Not found";
/// Verse text shown when no record matches.
pub const NOT_FOUND_TEXT: &str = "No verse text found for this number in the selected translation.";

/// Column names for the journey number.
pub const NUMBER_FIELDS: &[&str] = &["number"];
/// Column names for the display reference.
pub const REFERENCE_FIELDS: &[&str] = &["reference"];
/// Verse text columns in priority order.
pub const VERSE_TEXT_FIELDS: &[&str] = &[
    "verse_text (web)",
    "verse_text (kjv)",
    "verse_text (asv)",
    "verse_text (fbv)",
];
/// Column names for themes.
pub const THEMES_FIELDS: &[&str] = &["themes"];
/// Column names for the quick reflection.
pub const QUICK_FIELDS: &[&str] = &["quick reflection"];
/// Column names for the extended reflection.
pub const EXTENDED_FIELDS: &[&str] = &["extended reflection"];
/// Column names for the alignment note.
pub const ALIGN_FIELDS: &[&str] = &["alignment"];
/// Column names for the prayer.
pub const PRAYER_FIELDS: &[&str] = &["prayer"];

/// Normalizes a journey number to its canonical digit string.
///
/// Every non-digit character is removed and leading zeros are dropped, so
/// `"007"`, `" 7 "` and `"#7"` all normalize to `"7"`. Input without any digit
/// yields `None`.
///
/// # Examples
///
/// ```
/// use bible_journey::verse::normalize_number;
///
/// assert_eq!(normalize_number("007").as_deref(), Some("7"));
/// assert_eq!(normalize_number(" 7").as_deref(), Some("7"));
/// assert_eq!(normalize_number("000").as_deref(), Some("0"));
/// assert_eq!(normalize_number("abc"), None);
/// assert_eq!(normalize_number(""), None);
/// ```
pub fn normalize_number(raw: &str) -> Option<String> {
    let digits: String = raw.trim().chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }

    // Equivalent to a base-10 integer round trip, without an overflow ceiling
    let canonical = digits.trim_start_matches('0');
    if canonical.is_empty() {
        Some("0".to_string())
    } else {
        Some(canonical.to_string())
    }
}

/// The logical view of one resolved dataset row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerseRecord {
    /// Canonical journey number that was looked up
    pub number: String,
    /// Display reference (e.g. "Gen 1:7")
    pub reference: String,
    /// Verse text from the first populated text column
    pub text: String,
    /// Themes from the dataset
    pub themes: String,
    /// Quick reflection from the dataset
    pub quick: String,
    /// Extended reflection from the dataset
    pub extended: String,
    /// Alignment note from the dataset
    pub align: String,
    /// Prayer from the dataset
    pub prayer: String,
    found: bool,
}

impl VerseRecord {
    /// Extracts a verse record from a matching dataset row.
    pub fn from_record(number: &str, record: &Record) -> Self {
        let field = |fields: &[&str]| record.first_non_empty(fields).unwrap_or_default().to_string();
        Self {
            number: number.to_string(),
            reference: field(REFERENCE_FIELDS),
            text: field(VERSE_TEXT_FIELDS),
            themes: field(THEMES_FIELDS),
            quick: field(QUICK_FIELDS),
            extended: field(EXTENDED_FIELDS),
            align: field(ALIGN_FIELDS),
            prayer: field(PRAYER_FIELDS),
            found: true,
        }
    }

    /// The sentinel returned when no record matches `number`.
    pub fn not_found(number: &str) -> Self {
        Self {
            number: number.to_string(),
            reference: NOT_FOUND_REFERENCE.to_string(),
            text: NOT_FOUND_TEXT.to_string(),
            ..Self::default()
        }
    }

    /// False for the not-found sentinel.
    pub fn is_found(&self) -> bool {
        self.found
    }

    /// True when the record matched and carries verse text.
    pub fn has_text(&self) -> bool {
        self.found && !self.text.trim().is_empty()
    }
}

/// Finds the first record whose normalized number equals `target`.
///
/// `target` must already be normalized. Linear scan; datasets hold a few
/// thousand rows.
pub fn find_record<'a>(dataset: &'a Dataset, target: &str) -> Option<&'a Record> {
    dataset.records().iter().find(|record| {
        record
            .first_non_empty(NUMBER_FIELDS)
            .and_then(normalize_number)
            .is_some_and(|number| number == target)
    })
}

/// Resolves journey numbers against a dataset.
///
/// # Examples
///
/// ```
/// use bible_journey::dataset::Dataset;
/// use bible_journey::verse::lookup;
///
/// let dataset = Dataset::parse("number,reference,verse_text (kjv)\n7,Gen 1:7,And God made the firmament\n");
/// let verse = lookup(&dataset, "7");
/// assert_eq!(verse.reference, "Gen 1:7");
/// assert!(lookup(&dataset, "8").reference == "Not found");
/// ```
pub fn lookup(dataset: &Dataset, target: &str) -> VerseRecord {
    match find_record(dataset, target) {
        Some(record) => VerseRecord::from_record(target, record),
        None => VerseRecord::not_found(target),
    }
}

/// Resolves journey numbers against lazily loaded, cached translation datasets.
pub struct VerseResolver<F> {
    loader: DatasetLoader<F>,
}

impl<F: ResourceFetcher> VerseResolver<F> {
    /// Creates a resolver over a dataset loader.
    pub fn new(loader: DatasetLoader<F>) -> Self {
        Self { loader }
    }

    /// Resolves `number` in the dataset for `translation`.
    ///
    /// The number is normalized before any dataset access; a number without
    /// digits short-circuits with `AppError::InputInvalid`. A valid number
    /// without a matching row yields the not-found sentinel, not an error.
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AppError::InputInvalid` if `number` contains no digits
    /// - `AppError::Dataset` if the translation dataset cannot be loaded
    pub fn resolve(&mut self, number: &str, translation: &str) -> AppResult<VerseRecord> {
        let target = normalize_number(number).ok_or_else(|| {
            AppError::InputInvalid(format!("'{}' contains no digits", number.trim()))
        })?;

        let dataset = self.loader.load(translation)?;
        let verse = lookup(&dataset, &target);
        debug!(
            "Resolved #{} in {}: {}",
            target,
            translation,
            if verse.is_found() { verse.reference.as_str() } else { "no match" }
        );
        Ok(verse)
    }

    /// The dataset loader (and its cache).
    pub fn loader(&self) -> &DatasetLoader<F> {
        &self.loader
    }

    /// Mutable access to the dataset loader, e.g. to preload a translation.
    pub fn loader_mut(&mut self) -> &mut DatasetLoader<F> {
        &mut self.loader
    }
}
