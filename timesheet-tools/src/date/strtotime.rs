//! A `strtotime`-style parser for the date formats timesheet APIs and
//! users actually send.

use super::DateParser;
use chrono::{
    DateTime, Days, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Utc,
};
use serde::Deserialize;
use timesheet_types::ParseOutcome;
use tracing::{trace, warn};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Options for [`StrToTime`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Instant relative phrases are resolved against. `None` means the
    /// current time at each parse.
    pub reference: Option<DateTime<Utc>>,
    /// Offset from UTC, in minutes, applied to inputs that carry no zone.
    pub utc_offset_minutes: i32,
}

/// Default [`DateParser`].
///
/// Understands:
/// - `now`, `today`, `midnight`, `tomorrow`, `yesterday`
/// - `@<unix seconds>`
/// - RFC 3339 and RFC 2822
/// - `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`, optionally followed by
///   `HH:MM[:SS]`
/// - relative phrases: `+1 day`, `-2 weeks`, `3 hours ago`, `next week`,
///   `+1 week 2 days`
#[derive(Debug, Clone)]
pub struct StrToTime {
    reference: Option<DateTime<Utc>>,
    offset: FixedOffset,
}

impl StrToTime {
    /// Creates a parser from the given config.
    ///
    /// An offset outside +/-24h is ignored and UTC used instead.
    #[must_use]
    pub fn new(config: ParserConfig) -> Self {
        let offset = config
            .utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .unwrap_or_else(|| {
                warn!(
                    minutes = config.utc_offset_minutes,
                    "utc offset out of range, using UTC"
                );
                Utc.fix()
            });

        Self {
            reference: config.reference,
            offset,
        }
    }

    /// Creates a parser whose relative phrases resolve against `reference`.
    #[must_use]
    pub fn with_reference(reference: DateTime<Utc>) -> Self {
        Self::new(ParserConfig {
            reference: Some(reference),
            ..ParserConfig::default()
        })
    }

    /// Returns the offset applied to zone-less inputs.
    #[must_use]
    pub const fn offset(&self) -> FixedOffset {
        self.offset
    }

    fn reference(&self) -> DateTime<Utc> {
        self.reference.unwrap_or_else(Utc::now)
    }

    fn localize(&self, naive: NaiveDateTime) -> Option<DateTime<Utc>> {
        self.offset
            .from_local_datetime(&naive)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }

    /// Local midnight `days` days away from `now`.
    fn midnight(&self, now: DateTime<Utc>, days: i64) -> Option<DateTime<Utc>> {
        let today = now.with_timezone(&self.offset).date_naive();
        let day = if days >= 0 {
            today.checked_add_days(Days::new(days.unsigned_abs()))?
        } else {
            today.checked_sub_days(Days::new(days.unsigned_abs()))?
        };
        self.localize(day.and_hms_opt(0, 0, 0)?)
    }

    fn parse_keyword(&self, lower: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match lower {
            "now" => Some(now),
            "today" | "midnight" => self.midnight(now, 0),
            "tomorrow" => self.midnight(now, 1),
            "yesterday" => self.midnight(now, -1),
            _ => None,
        }
    }

    fn parse_absolute(&self, text: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Some(naive) = DATETIME_FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        {
            return self.localize(naive);
        }
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(text, fmt).ok())
            .and_then(|date| self.localize(date.and_hms_opt(0, 0, 0)?))
    }
}

impl Default for StrToTime {
    fn default() -> Self {
        Self::new(ParserConfig::default())
    }
}

impl DateParser for StrToTime {
    fn parse(&self, input: &str) -> ParseOutcome {
        let text = input.trim();
        let lower = text.to_ascii_lowercase();
        if lower.is_empty() {
            return ParseOutcome::Unparsed(input.to_string());
        }

        if let Some(secs) = lower.strip_prefix('@') {
            if let Some(millis) = secs.parse::<i64>().ok().and_then(|s| s.checked_mul(1000)) {
                trace!(input, millis, "parsed unix timestamp");
                return ParseOutcome::Timestamp(millis);
            }
            return ParseOutcome::Unparsed(input.to_string());
        }

        let now = self.reference();
        if let Some(date) = self.parse_keyword(&lower, now) {
            trace!(input, "parsed keyword");
            return ParseOutcome::Date(date);
        }
        if let Some(date) = self.parse_absolute(text) {
            trace!(input, "parsed absolute date");
            return ParseOutcome::Date(date);
        }
        if let Some(date) = parse_relative(&lower).and_then(|delta| now.checked_add_signed(delta)) {
            trace!(input, "parsed relative date");
            return ParseOutcome::Date(date);
        }

        ParseOutcome::Unparsed(input.to_string())
    }
}

/// Seconds in one `unit`, accepting singular, plural and short forms.
fn unit_seconds(unit: &str) -> Option<i64> {
    let unit = unit.strip_suffix('s').unwrap_or(unit);
    match unit {
        "sec" | "second" => Some(1),
        "min" | "minute" => Some(60),
        "hour" => Some(3_600),
        "day" => Some(86_400),
        "week" => Some(604_800),
        "fortnight" => Some(1_209_600),
        _ => None,
    }
}

/// Parses a chain of `<amount> <unit>` pairs, optionally ending in `ago`.
///
/// `next` and `last` stand for `+1` and `-1`.
fn parse_relative(lower: &str) -> Option<TimeDelta> {
    let mut tokens: Vec<&str> = lower.split_whitespace().collect();
    let ago = tokens.last() == Some(&"ago");
    if ago {
        tokens.pop();
    }
    if tokens.is_empty() || tokens.len() % 2 != 0 {
        return None;
    }

    let mut total: i64 = 0;
    for pair in tokens.chunks(2) {
        let amount = match pair[0] {
            "next" => 1,
            "last" => -1,
            n => n.parse::<i64>().ok()?,
        };
        let secs = amount.checked_mul(unit_seconds(pair[1])?)?;
        total = total.checked_add(secs)?;
    }
    if ago {
        total = total.checked_neg()?;
    }

    TimeDelta::try_seconds(total)
}
