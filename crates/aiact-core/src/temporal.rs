//! # Temporal Types: UTC Timestamps
//!
//! [`Timestamp`] wraps a `DateTime<Utc>`. Catalog data and response bodies
//! carry ISO 8601 strings; anything with an offset is normalized to UTC on
//! parse.
//!
//! ## Rendering
//!
//! - [`Timestamp::to_iso8601`]: `YYYY-MM-DDTHH:MM:SS.mmmZ`, the form stub
//!   responses put in their `timestamp` field.
//! - [`Timestamp::format_localized`]: the long Korean form
//!   (`2025년 11월 15일 오후 07:30`) or the short English form
//!   (`Nov 15, 2025, 07:30 PM`). Rendered in UTC so output does not depend
//!   on the host time zone.

use chrono::{DateTime, SecondsFormat, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::language::Language;

/// A UTC timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Wrap an existing `DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidTimestamp`] if the string is not RFC 3339.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| CoreError::InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// ISO 8601 with millisecond precision and `Z` suffix.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    /// Human-readable date and time in `lang`.
    pub fn format_localized(&self, lang: Language) -> String {
        match lang {
            Language::Ko => {
                let (pm, hour) = self.0.hour12();
                format!(
                    "{} {} {:02}:{:02}",
                    self.0.format("%Y년 %-m월 %-d일"),
                    if pm { "오후" } else { "오전" },
                    hour,
                    self.0.minute()
                )
            }
            Language::En => self.0.format("%b %-d, %Y, %I:%M %p").to_string(),
        }
    }

    /// Calendar date only: `2025. 1. 15.` in Korean, `1/15/2025` in English.
    pub fn format_date(&self, lang: Language) -> String {
        let pattern = match lang {
            Language::Ko => "%Y. %-m. %-d.",
            Language::En => "%-m/%-d/%Y",
        };
        self.0.format(pattern).to_string()
    }
}

/// Render `ts` for display in `lang`. See [`Timestamp::format_localized`].
pub fn format_timestamp(ts: &Timestamp, lang: Language) -> String {
    ts.format_localized(lang)
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}
