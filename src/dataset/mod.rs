//! Translation datasets: materialization, resource lookup, fetching and caching.
//!
//! A dataset is the parsed form of one translation's CSV file: a sequence of
//! records keyed by lowercased header names. Datasets are parsed once and then
//! shared read-only through the [`DatasetLoader`] cache.
//!
//! # Module Structure
//!
//! - `translations`: translation code to candidate resource names
//! - `fetch`: the `ResourceFetcher` seam with HTTP and directory backends
//! - `loader`: ordered candidate fetching and the per-session cache

pub mod fetch;
pub mod loader;
pub mod translations;

pub use fetch::{DirectoryFetcher, HttpFetcher, ResourceFetcher};
pub use loader::{fetch_first_available, DatasetCache, DatasetLoader, FetchedResource};
pub use translations::candidate_files_for_translation;

use crate::csv::{drop_blank_rows, tokenize, Row};
use std::collections::HashMap;

/// One dataset row: lowercased field name to trimmed value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Returns the value stored under `field`, if the column exists.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    /// Returns the first non-empty value among `fields`, in order.
    pub fn first_non_empty(&self, fields: &[&str]) -> Option<&str> {
        fields
            .iter()
            .filter_map(|field| self.get(field))
            .find(|value| !value.is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A parsed translation dataset.
///
/// All records share the header set the dataset was built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Tokenizes and materializes CSV text in one step.
    ///
    /// # Examples
    ///
    /// ```
    /// use bible_journey::dataset::Dataset;
    ///
    /// let dataset = Dataset::parse("Number, Reference \n7,Gen 1:7\n");
    /// assert_eq!(dataset.headers(), ["number", "reference"]);
    /// assert_eq!(dataset.records()[0].get("reference"), Some("Gen 1:7"));
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::from_rows(tokenize(text))
    }

    /// Builds a dataset from a tokenized matrix.
    ///
    /// Blank rows are dropped first. The first remaining row supplies the
    /// header names (trimmed, lowercased); every later row maps each header to
    /// its trimmed cell, or to an empty string when the row is short. Extra
    /// cells beyond the header are ignored, and duplicate headers keep the
    /// right-most column's value.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        let mut rows = drop_blank_rows(rows).into_iter();
        let headers: Vec<String> = match rows.next() {
            Some(header_row) => header_row.iter().map(|h| normalize_header(h)).collect(),
            None => return Self::default(),
        };

        let records = rows
            .map(|cells| {
                headers
                    .iter()
                    .enumerate()
                    .map(|(i, header)| {
                        let value = cells.get(i).map(|c| c.trim()).unwrap_or_default();
                        (header.clone(), value.to_string())
                    })
                    .collect()
            })
            .collect();

        Self { headers, records }
    }

    /// Header names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Records in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the dataset holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Header cells may carry a byte-order marker in front of the first name.
fn normalize_header(header: &str) -> String {
    header
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_are_trimmed_and_lowercased() {
        let dataset = Dataset::parse("\u{feff}Number , REFERENCE,Verse_Text (KJV)\n1,Gen 1:1,In the beginning\n");
        assert_eq!(
            dataset.headers(),
            ["number", "reference", "verse_text (kjv)"]
        );
        let record = &dataset.records()[0];
        assert_eq!(record.get("number"), Some("1"));
        assert_eq!(record.get("verse_text (kjv)"), Some("In the beginning"));
    }

    #[test]
    fn test_values_are_trimmed() {
        let dataset = Dataset::parse("number,reference\n  7 ,  Gen 1:7  \n");
        assert_eq!(dataset.records()[0].get("number"), Some("7"));
        assert_eq!(dataset.records()[0].get("reference"), Some("Gen 1:7"));
    }

    #[test]
    fn test_short_rows_fill_with_empty_strings() {
        let dataset = Dataset::parse("number,reference,themes\n3\n");
        let record = &dataset.records()[0];
        assert_eq!(record.get("number"), Some("3"));
        assert_eq!(record.get("reference"), Some(""));
        assert_eq!(record.get("themes"), Some(""));
        assert_eq!(record.get("prayer"), None);
    }

    #[test]
    fn test_extra_cells_are_ignored() {
        let dataset = Dataset::parse("number\n3,extra,cells\n");
        let record = &dataset.records()[0];
        assert_eq!(record.get("number"), Some("3"));
        assert_eq!(record.fields.len(), 1);
    }

    #[test]
    fn test_duplicate_headers_overwrite_in_document_order() {
        let dataset = Dataset::parse("themes,Themes\nfirst,second\n");
        assert_eq!(dataset.records()[0].get("themes"), Some("second"));
    }

    #[test]
    fn test_blank_rows_are_skipped_before_header() {
        let dataset = Dataset::parse("\n , \nnumber,reference\n\n1,Gen 1:1\n,\n");
        assert_eq!(dataset.headers(), ["number", "reference"]);
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_empty_text_yields_empty_dataset() {
        let dataset = Dataset::parse("  \n\n");
        assert!(dataset.is_empty());
        assert!(dataset.headers().is_empty());
    }

    #[test]
    fn test_header_only_yields_no_records() {
        let dataset = Dataset::parse("number,reference\n");
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers().len(), 2);
    }

    #[test]
    fn test_first_non_empty() {
        let record: Record = [
            ("verse_text (web)", ""),
            ("verse_text (kjv)", "Let there be light"),
            ("verse_text (asv)", "ASV text"),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            record.first_non_empty(&["verse_text (web)", "verse_text (kjv)", "verse_text (asv)"]),
            Some("Let there be light")
        );
        assert_eq!(record.first_non_empty(&["missing", "verse_text (asv)"]), Some("ASV text"));
        assert_eq!(record.first_non_empty(&["verse_text (web)"]), None);
    }
}
