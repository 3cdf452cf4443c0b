//! Timestamp rendering for text sinks

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const ISO8601_MILLIS: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// How a record's timestamp is rendered in text output
///
/// ```
/// use nlog::TimestampFormat;
/// use chrono::Utc;
///
/// let rendered = TimestampFormat::Iso8601.format(&Utc::now());
/// assert!(rendered.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// `2025-01-08T10:30:45.123456Z`
    Iso8601Micros,

    /// `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// `1736332245123`
    UnixMillis,

    /// Any strftime-compatible format string; an invalid pattern falls back
    /// to [`TimestampFormat::Iso8601`]
    Custom(String),

    /// Leave the timestamp out entirely
    Omit,
}

impl TimestampFormat {
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Utc>) -> String {
        match self {
            TimestampFormat::Iso8601 => datetime.format(ISO8601_MILLIS).to_string(),
            TimestampFormat::Iso8601Micros => datetime.format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => {
                let mut rendered = String::new();
                if write!(rendered, "{}", datetime.format(format_str)).is_err() {
                    return datetime.format(ISO8601_MILLIS).to_string();
                }
                rendered
            }
            TimestampFormat::Omit => String::new(),
        }
    }

    pub fn is_omitted(&self) -> bool {
        matches!(self, TimestampFormat::Omit)
    }
}
