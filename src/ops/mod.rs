//! User-facing operations.
//!
//! Each operation drives the core (resolver, journal store, export formatters)
//! and returns an outcome describing the terminal state to show: populated
//! fields, a document, or a status line. Printing is left to the binary.

pub mod clear;
pub mod export;
pub mod list;
pub mod lookup;
pub mod save;

pub use clear::clear_journal;
pub use export::{export_journal, write_document, ExportFormat, ExportOutcome};
pub use list::{list_entries, render_entries};
pub use lookup::{lookup_verse, render_verse, LookupOutcome};
pub use save::{save_entry, SaveOutcome};
