//! Translation code to candidate resource names.
//!
//! The table is configuration data. Alternate spellings of the same file are
//! intentional and their order is significant: candidates are tried first to last.

use crate::constants::DEFAULT_TRANSLATION;

/// American Standard Version candidates.
pub const ASV_CANDIDATES: &[&str] = &["FullNumbers_WithVerses_ASV Time Complete.csv"];

/// World English Bible candidates.
pub const WEB_CANDIDATES: &[&str] = &["Bible_Journey_Number_Map_Time_WEB.csv"];

/// King James Version candidates. Both spellings exist in published data sets.
pub const KJV_CANDIDATES: &[&str] = &[
    "Bible_Journey JKV Time complete.csv",
    "Bible_Journey KJV Time Complete.csv",
];

/// Normalizes a translation code to the form used as a cache key.
///
/// Codes are case-insensitive and surrounding whitespace is ignored; a blank
/// code selects the default translation.
///
/// # Examples
///
/// ```
/// use bible_journey::dataset::translations::normalize_code;
///
/// assert_eq!(normalize_code(" WEB "), "web");
/// assert_eq!(normalize_code(""), "kjv");
/// ```
pub fn normalize_code(code: &str) -> String {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        DEFAULT_TRANSLATION.to_string()
    } else {
        code
    }
}

/// Returns the ordered candidate resource names for a translation code.
///
/// Unrecognized codes fall back to the default translation's candidates.
pub fn candidate_files_for_translation(code: &str) -> &'static [&'static str] {
    match normalize_code(code).as_str() {
        "asv" => ASV_CANDIDATES,
        "web" => WEB_CANDIDATES,
        _ => KJV_CANDIDATES,
    }
}
