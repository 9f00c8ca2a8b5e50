//! Error handling utilities for the bible-journey application.
//!
//! This module provides the central error type `AppError` which represents all
//! possible error conditions that might occur in the application, as well as the
//! convenience type alias `AppResult` for functions that can return these errors.
//!
//! Three conditions deliberately do not surface as `AppError` at the command
//! boundary: a number without digits (`InputInvalid`, recovered by the caller),
//! a number with no matching record (a sentinel `VerseRecord`, not an error), and
//! storage failures that the tolerant `JournalStore` methods degrade on.

use std::io;
use thiserror::Error;

/// A single failed attempt to fetch one candidate dataset resource.
///
/// # Examples
///
/// ```
/// use bible_journey::errors::FetchError;
///
/// let error = FetchError::HttpStatus {
///     resource: "Bible_Journey KJV Time Complete.csv".to_string(),
///     status: 404,
/// };
/// assert!(format!("{}", error).contains("HTTP 404"));
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, refused connection, timeout).
    #[error("Network error fetching '{resource}': {source}")]
    Transport {
        /// The candidate resource name
        resource: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching '{resource}'")]
    HttpStatus {
        /// The candidate resource name
        resource: String,
        /// The HTTP status code
        status: u16,
    },

    /// The resource was reachable but held no content.
    #[error("Resource '{resource}' is empty")]
    EmptyBody {
        /// The candidate resource name
        resource: String,
    },

    /// Reading a local resource failed.
    #[error("Failed to read '{resource}': {source}")]
    Io {
        /// The candidate resource name
        resource: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The resource name could not be turned into a request URL.
    #[error("Invalid URL for '{resource}': {reason}")]
    InvalidUrl {
        /// The candidate resource name
        resource: String,
        /// Why URL construction failed
        reason: String,
    },
}

/// Errors raised while loading a translation dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// Every candidate resource for a translation failed.
    ///
    /// Carries every attempted name so callers can report them, and the last
    /// underlying failure as the error source.
    #[error("Could not load {} CSV. Tried: {}.", .translation.to_uppercase(), tried_list(.tried))]
    Unavailable {
        /// The (normalized) translation code that was requested
        translation: String,
        /// Candidate resource names in the order they were attempted
        tried: Vec<String>,
        /// The failure reported by the final attempt
        #[source]
        last: Option<FetchError>,
    },
}

fn tried_list(tried: &[String]) -> String {
    if tried.is_empty() {
        "n/a".to_string()
    } else {
        tried.join(" | ")
    }
}

/// Errors raised by the key-value storage backing the journal.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The storage medium could not be read or written.
    #[error("Storage unavailable for key '{key}': {source}")]
    Unavailable {
        /// The storage key being accessed
        key: String,
        /// The underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A stored payload is not a valid journal.
    #[error("Stored journal under '{key}' is unreadable: {source}")]
    Corrupt {
        /// The storage key holding the payload
        key: String,
        /// The JSON parse failure
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory journal could not be serialized.
    #[error("Failed to serialize journal: {0}")]
    Serialize(#[source] serde_json::Error),
}

/// Represents all possible errors that can occur in the bible-journey application.
///
/// This enum is the central error type used across the application, with variants
/// for different error categories. It uses `thiserror` for deriving the `Error` trait
/// implementation and formatted error messages.
///
/// # Examples
///
/// Creating a configuration error:
/// ```
/// use bible_journey::errors::AppError;
///
/// let error = AppError::Config("Data directory path is empty".to_string());
/// assert_eq!(format!("{}", error), "Configuration error: Data directory path is empty");
/// ```
///
/// Converting from an IO error:
/// ```
/// use bible_journey::errors::AppError;
/// use std::io::{self, ErrorKind};
///
/// let io_error = io::Error::new(ErrorKind::NotFound, "file not found");
/// let app_error: AppError = io_error.into();
///
/// match app_error {
///     AppError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::NotFound),
///     _ => panic!("Expected Io variant"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum AppError {
    /// Errors related to configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input/output errors from filesystem operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// User input that cannot be resolved (e.g. a number without digits).
    #[error("Invalid input: {0}")]
    InputInvalid(String),

    /// A translation dataset could not be loaded.
    #[error("{0}")]
    Dataset(#[from] DatasetError),

    /// Journal storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// A type alias for `Result<T, AppError>` to simplify function signatures.
///
/// # Examples
///
/// ```
/// use bible_journey::errors::{AppResult, AppError};
///
/// fn might_fail() -> AppResult<String> {
///     if false {
///         return Err(AppError::InputInvalid("no digits".to_string()));
///     }
///     Ok("Operation succeeded".to_string())
/// }
/// ```
pub type AppResult<T> = Result<T, AppError>;
