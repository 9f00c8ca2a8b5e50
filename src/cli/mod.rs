//! Command-line interface definitions.

use crate::constants::{
    APP_DESCRIPTION, APP_NAME, DEFAULT_LOG_LEVEL, DEFAULT_SOURCE_TYPE, LOG_FORMAT_JSON,
    LOG_FORMAT_TEXT,
};
use crate::ops::ExportFormat;
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    Text,
    /// One JSON object per event
    Json,
}

/// Look up Bible Journey numbers and keep a local reflection journal
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    /// Log output format
    #[clap(long, value_enum, default_value = LOG_FORMAT_TEXT, global = true)]
    pub log_format: LogFormat,

    /// Log level filter (overridden by RUST_LOG)
    #[clap(long, default_value = DEFAULT_LOG_LEVEL, global = true)]
    pub log_level: String,

    /// Print debug diagnostics
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Resolve a journey number to its verse and reflections
    Lookup {
        /// Journey number (non-digits are ignored)
        number: String,

        /// Translation code (asv, web, kjv)
        #[clap(short = 't', long)]
        translation: Option<String>,
    },

    /// Resolve a number and save it to the journal
    Save {
        /// Journey number (non-digits are ignored)
        number: String,

        /// Translation code (asv, web, kjv)
        #[clap(short = 't', long)]
        translation: Option<String>,

        /// Your own themes
        #[clap(long, default_value = "")]
        themes: String,

        /// Your own reflection
        #[clap(long, default_value = "")]
        reflection: String,

        /// Where the number came from
        #[clap(long, default_value = DEFAULT_SOURCE_TYPE)]
        source: String,
    },

    /// Show saved entries, newest first
    List,

    /// Export the journal
    Export {
        /// Document kind
        #[clap(value_enum)]
        format: ExportFormat,

        /// Field to include in a selected export (repeatable; default all)
        #[clap(long = "field")]
        fields: Vec<String>,

        /// Output file or directory (default stdout)
        #[clap(short = 'o', long)]
        output: Option<PathBuf>,
    },

    /// Remove every saved entry on this device
    Clear {
        /// Skip the confirmation prompt
        #[clap(short = 'y', long)]
        yes: bool,
    },
}

impl CliArgs {
    /// The filter directive implied by the flags: `debug` when verbose,
    /// otherwise the requested level.
    pub fn log_directive(&self) -> &str {
        if self.verbose {
            "debug"
        } else {
            &self.log_level
        }
    }
}

impl LogFormat {
    /// Name as accepted on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => LOG_FORMAT_TEXT,
            LogFormat::Json => LOG_FORMAT_JSON,
        }
    }
}

/// Prompts for a yes/no answer, reading from `input` and writing to `output`.
///
/// An empty answer or end of input selects `default`; anything other than
/// y/yes/n/no asks again.
///
/// # Errors
///
/// Returns an I/O error if the prompt cannot be written or input cannot be read.
pub fn prompt_yes_no_with<R: BufRead, W: Write>(
    question: &str,
    default: bool,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    let prompt = if default {
        format!("{} [Y/n] ", question)
    } else {
        format!("{} [y/N] ", question)
    };

    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Ok(default);
        }

        match answer.trim().to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}

/// Prompts on the terminal for a yes/no answer.
///
/// # Errors
///
/// Returns an I/O error if the terminal cannot be read or written.
pub fn prompt_yes_no(question: &str, default: bool) -> io::Result<bool> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    prompt_yes_no_with(question, default, &mut input, &mut io::stdout())
}
