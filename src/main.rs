/*!
# Bible Journey

Command-line front end: resolves journey numbers to verses and manages the
local journal.

## Usage

```
bible-journey [OPTIONS] <COMMAND>

Commands:
  lookup  Resolve a journey number to its verse and reflections
  save    Resolve a number and save it to the journal
  list    Show saved entries, newest first
  export  Export the journal (csv, text, selected)
  clear   Remove every saved entry on this device

Options:
      --log-format <FORMAT>  Log output format [text, json]
      --log-level <LEVEL>    Log level filter (overridden by RUST_LOG)
  -v, --verbose              Print debug diagnostics
```

Command output goes to stdout; diagnostics go to stderr.

## Configuration

- `BJ_DATA`: dataset base URL or directory (defaults to "~/.bible-journey/data")
- `BJ_DIR`: journal storage directory (defaults to "~/.bible-journey")
- `BJ_ASSET_VERSION`: cache-busting version for remote fetches (defaults to "build-9")
- `BJ_TRANSLATION`: default translation code (defaults to "kjv")
*/

use bible_journey::cli::{prompt_yes_no, CliArgs, Commands, LogFormat};
use bible_journey::config::Config;
use bible_journey::constants::{
    APP_NAME, CLEAR_CONFIRMATION_PROMPT, MSG_CLEARED, MSG_CLEAR_CANCELLED, MSG_NOTHING_TO_SHARE,
    TRACING_ROOT_SPAN_NAME, TRACING_SERVICE_NAME,
};
use bible_journey::dataset::DatasetLoader;
use bible_journey::errors::{AppError, AppResult};
use bible_journey::export::FieldSelection;
use bible_journey::journal::{Annotations, JournalStore};
use bible_journey::ops::{self, ExportOutcome};
use bible_journey::verse::VerseResolver;
use chrono::Utc;
use clap::Parser;
use std::io;
use std::process;
use tracing::{debug, error, info, info_span, warn};
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

/// Installs the global subscriber: `RUST_LOG` wins over `--log-level`, and
/// `--verbose` forces debug.
fn init_tracing(args: &CliArgs) -> AppResult<()> {
    let directive = args.log_directive();
    let filter = if args.verbose {
        EnvFilter::try_new(directive)
    } else {
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(directive))
    }
    .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", directive, e)))?;

    let registry = tracing_subscriber::registry().with(filter);
    match args.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(io::stderr)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .init(),
        LogFormat::Text => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(io::stderr)
                    .with_timer(ChronoUtc::rfc_3339()),
            )
            .init(),
    }
    Ok(())
}

fn main() {
    let args = CliArgs::parse();

    if let Err(e) = init_tracing(&args) {
        eprintln!("{}", e);
        process::exit(2);
    }

    let correlation_id = Uuid::new_v4();
    let root_span = info_span!(
        TRACING_ROOT_SPAN_NAME,
        service_name = TRACING_SERVICE_NAME,
        correlation_id = %correlation_id
    );

    let result = root_span.in_scope(|| {
        info!("Starting {} ({})", APP_NAME, args.log_format.as_str());
        debug!("CLI arguments: {:?}", args.command);
        run(args)
    });

    if let Err(e) = result {
        root_span.in_scope(|| error!("Command failed: {}", e));
        eprintln!("{}", e);
        process::exit(1);
    }
}

/// Loads configuration, migrates legacy journal data, and runs one command.
fn run(args: CliArgs) -> AppResult<()> {
    let config = Config::load()?;
    config.validate()?;
    debug!("Loaded configuration: {:?}", config);

    let mut store = JournalStore::new(config.storage());
    if let Some(source) = store.migrate() {
        debug!("Journal migrated from legacy key {}", source);
    }

    match args.command {
        Commands::Lookup {
            number,
            translation,
        } => {
            let translation = translation.unwrap_or_else(|| config.default_translation.clone());
            let mut resolver = VerseResolver::new(DatasetLoader::new(config.fetcher()?));

            let outcome = ops::lookup_verse(&mut resolver, &number, &translation)?;
            if let Some(verse) = outcome.verse() {
                println!("{}", ops::render_verse(verse, &translation));
            }
            if let Some(status) = outcome.status() {
                println!("{}", status);
            }
        }

        Commands::Save {
            number,
            translation,
            themes,
            reflection,
            source,
        } => {
            let translation = translation.unwrap_or_else(|| config.default_translation.clone());
            let mut resolver = VerseResolver::new(DatasetLoader::new(config.fetcher()?));
            let annotations = Annotations {
                themes,
                reflection,
                source_type: source,
            };

            let outcome = ops::save_entry(
                &mut resolver,
                &mut store,
                &number,
                &translation,
                &annotations,
                Utc::now(),
            )?;
            println!("{}", outcome.message());
        }

        Commands::List => {
            let entries = ops::list_entries(&store);
            println!("{}", ops::render_entries(&entries));
        }

        Commands::Export {
            format,
            fields,
            output,
        } => {
            let selection = FieldSelection::from_tokens(&fields);
            match ops::export_journal(&store, format, &selection) {
                ExportOutcome::NothingToShare => println!("{}", MSG_NOTHING_TO_SHARE),
                ExportOutcome::Document(document) => match output {
                    Some(target) => {
                        let path = ops::write_document(&document, &target, format)?;
                        println!("Exported to {}", path.display());
                    }
                    None => println!("{}", document),
                },
            }
        }

        Commands::Clear { yes } => {
            let cleared = ops::clear_journal(&mut store, || {
                yes || prompt_yes_no(CLEAR_CONFIRMATION_PROMPT, false).unwrap_or_else(|e| {
                    warn!("Could not read confirmation: {}", e);
                    false
                })
            });
            if cleared {
                println!("{}", MSG_CLEARED);
            } else {
                println!("{}", MSG_CLEAR_CANCELLED);
            }
        }
    }

    Ok(())
}
