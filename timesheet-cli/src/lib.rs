//! Command definitions and execution for the `timesheet` CLI.
//!
//! Every command reads at most one JSON document (from `--input` or stdin)
//! and produces a single string for stdout.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};
use timesheet_tools::{
    by_id, date_from_string, format_time, get_hours, get_ids, validate_get, ParserConfig,
    StrToTime,
};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "timesheet")]
#[command(about = "Helpers for timesheet API resources")]
pub struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Format fractional hours as HH:MM
    FormatTime {
        #[arg(allow_hyphen_values = true)]
        hours: f64,
    },

    /// Print the unique, sorted ids of records nested under a key
    Ids {
        /// Key the record is wrapped under (e.g. client, day_entry)
        #[arg(short, long)]
        main_key: String,

        /// Field of the nested record to collect
        #[arg(short = 'k', long, default_value = "id")]
        index_key: String,

        /// JSON array of wrapper objects (defaults to stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Re-key records nested under a key by their id
    ById {
        #[arg(short, long)]
        main_key: String,

        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Print the effective hours of a day entry
    Hours {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Resolve a date string
    ParseDate {
        #[arg(allow_hyphen_values = true)]
        text: String,

        /// Instant relative phrases resolve against (RFC 3339, defaults to now)
        #[arg(long)]
        reference: Option<DateTime<Utc>>,

        /// Offset from UTC in minutes for inputs without a zone
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        utc_offset: i32,
    },

    /// Print a required field of an object
    Get {
        #[arg(short, long)]
        field: String,

        /// Error message used when the field is missing
        #[arg(long)]
        message: Option<String>,

        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

/// Runs `command`, reading JSON input from the given path or `stdin`.
pub fn run(command: &Command, stdin: impl Read) -> Result<String> {
    match command {
        Command::FormatTime { hours } => Ok(format_time(*hours)?),

        Command::Ids {
            main_key,
            index_key,
            input,
        } => {
            let entries = read_entries(input.as_deref(), stdin)?;
            let ids = get_ids(&entries, main_key, index_key)
                .with_context(|| format!("collecting `{index_key}` under `{main_key}`"))?;
            debug!(count = ids.len(), "collected ids");
            Ok(serde_json::to_string_pretty(&ids)?)
        }

        Command::ById { main_key, input } => {
            let entries = read_entries(input.as_deref(), stdin)?;
            let records = by_id(&entries, main_key)
                .with_context(|| format!("re-keying records under `{main_key}`"))?;
            let object: Map<String, Value> = records
                .into_iter()
                .map(|(id, record)| (id.to_string(), record))
                .collect();
            Ok(serde_json::to_string_pretty(&Value::Object(object))?)
        }

        Command::Hours { input } => {
            let resource = read_json(input.as_deref(), stdin)?;
            Ok(get_hours(&resource)?.to_string())
        }

        Command::ParseDate {
            text,
            reference,
            utc_offset,
        } => {
            let parser = StrToTime::new(ParserConfig {
                reference: *reference,
                utc_offset_minutes: *utc_offset,
            });
            Ok(date_from_string(&parser, text).to_string())
        }

        Command::Get {
            field,
            message,
            input,
        } => {
            let obj = read_json(input.as_deref(), stdin)?;
            let value = validate_get(&obj, field, message.as_deref())?;
            Ok(serde_json::to_string_pretty(value)?)
        }
    }
}

fn read_json(path: Option<&Path>, mut stdin: impl Read) -> Result<Value> {
    let text = match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut text = String::new();
            stdin.read_to_string(&mut text).context("reading stdin")?;
            text
        }
    };
    serde_json::from_str(&text).context("parsing JSON input")
}

fn read_entries(path: Option<&Path>, stdin: impl Read) -> Result<Vec<Value>> {
    match read_json(path, stdin)? {
        Value::Array(entries) => Ok(entries),
        other => bail!("expected a JSON array of entries, got {}", kind(&other)),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
