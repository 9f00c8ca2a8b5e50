/*!
# Bible Journey

Bible Journey turns a "journey number" (a time of day, a count, any number that
caught your eye) into a Bible verse with curated reflections, and keeps a local
journal of the verses you chose to save.

## Core Features

- Resolve a number against the ASV, WEB or KJV dataset
- Tolerant CSV parsing of hand-maintained spreadsheets
- Save entries with your own themes and reflection
- Export the journal as CSV, a plain-text transcript, or selected fields only

## Architecture

Leaf modules first:

- `csv`: Quote-aware CSV tokenizer and field quoting
- `dataset`: Header-keyed records, resource fetchers and the per-session dataset cache
- `verse`: Number normalization and verse resolution
- `journal`: Journal entries, legacy-key migration and the key-value storage seam
- `export`: CSV, plain-text and selected-field formatters
- `ops`: User-facing operations driven by the binary
- `cli`, `config`, `errors`, `constants`: Ambient plumbing

## Usage Example

```rust,no_run
use bible_journey::dataset::DatasetLoader;
use bible_journey::verse::VerseResolver;
use bible_journey::Config;

fn main() -> bible_journey::AppResult<()> {
    let config = Config::load()?;
    config.validate()?;

    let mut resolver = VerseResolver::new(DatasetLoader::new(config.fetcher()?));
    let verse = resolver.resolve("1207", "kjv")?;
    println!("{}: {}", verse.reference, verse.text);
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Application-wide constants
pub mod constants;
/// CSV tokenizing and quoting
pub mod csv;
/// Translation datasets: parsing, fetching and caching
pub mod dataset;
/// Error types and utilities for error handling
pub mod errors;
/// Journal export formatters
pub mod export;
/// Journal entries and persistence
pub mod journal;
/// User-facing operations
pub mod ops;
/// Verse resolution
pub mod verse;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{JournalEntry, JournalStore};
pub use verse::{VerseRecord, VerseResolver};
