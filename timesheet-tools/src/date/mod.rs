//! Date resolution through an injected parser.
//!
//! [`date_from_string`] never parses anything itself. The string-to-time
//! capability is a [`DateParser`], so callers choose how loose parsing
//! should be. [`StrToTime`] is the default, modelled on `strtotime`.

mod strtotime;

pub use strtotime::{ParserConfig, StrToTime};

use chrono::DateTime;
use timesheet_types::{ParseOutcome, ParsedDate};
use tracing::debug;

/// A string-to-time parsing strategy.
pub trait DateParser: Send + Sync {
    /// Parses `input` into a date, a millisecond timestamp, or nothing.
    fn parse(&self, input: &str) -> ParseOutcome;
}

impl<F> DateParser for F
where
    F: Fn(&str) -> ParseOutcome + Send + Sync,
{
    fn parse(&self, input: &str) -> ParseOutcome {
        self(input)
    }
}

/// Resolves `input` into a date using `parser`.
///
/// Dates are returned directly and millisecond timestamps are converted.
/// Anything the parser could not resolve, including timestamps outside the
/// representable range, comes back as [`ParsedDate::Raw`] rather than an
/// error.
pub fn date_from_string<P>(parser: &P, input: &str) -> ParsedDate
where
    P: DateParser + ?Sized,
{
    match parser.parse(input) {
        ParseOutcome::Date(date) => ParsedDate::Date(date),
        ParseOutcome::Timestamp(millis) => match DateTime::from_timestamp_millis(millis) {
            Some(date) => ParsedDate::Date(date),
            None => {
                debug!(millis, "timestamp out of range, passing input through");
                ParsedDate::Raw(input.to_string())
            }
        },
        ParseOutcome::Unparsed(raw) => {
            debug!(input, "unparseable date, passing through");
            ParsedDate::Raw(raw)
        }
    }
}
