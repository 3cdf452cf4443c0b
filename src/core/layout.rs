//! Single-line text layout shared by the console and file sinks

use super::record::Record;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};

/// Which parts of a record make it into a text line
///
/// The default renders `[2025-01-08T10:30:45.123Z] [WARN ] [db] slow query`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextLayout {
    pub timestamp: TimestampFormat,
    pub include_thread: bool,
}

impl Default for TextLayout {
    fn default() -> Self {
        Self {
            timestamp: TimestampFormat::default(),
            include_thread: false,
        }
    }
}

impl TextLayout {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp = format;
        self
    }

    #[must_use]
    pub fn with_thread(mut self, include: bool) -> Self {
        self.include_thread = include;
        self
    }

    /// Render everything but the level, so callers can decorate it
    pub fn render_with_level(&self, record: &Record, level: &str) -> String {
        let mut line = String::with_capacity(record.message.len() + record.tag.len() + 48);

        if !self.timestamp.is_omitted() {
            line.push('[');
            line.push_str(&self.timestamp.format(&record.timestamp));
            line.push_str("] ");
        }

        line.push('[');
        line.push_str(level);
        line.push_str("] ");

        if self.include_thread {
            line.push('(');
            line.push_str(record.thread_label());
            line.push_str(") ");
        }

        line.push('[');
        line.push_str(&record.tag);
        line.push_str("] ");
        line.push_str(&record.message);
        line
    }

    pub fn render(&self, record: &Record) -> String {
        self.render_with_level(record, &format!("{:5}", record.severity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Severity;
    use chrono::TimeZone;

    fn record() -> Record {
        let ts = chrono::Utc
            .with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime");
        Record::new(Severity::Warn, "db", "slow query").with_timestamp(ts)
    }

    #[test]
    fn test_default_layout() {
        let line = TextLayout::default().render(&record());
        assert_eq!(line, "[2025-01-08T10:30:45.000Z] [WARN ] [db] slow query");
    }

    #[test]
    fn test_omit_timestamp_with_thread() {
        let mut rec = record();
        rec.thread_name = Some("main".to_string());
        let line = TextLayout::new()
            .with_timestamp_format(TimestampFormat::Omit)
            .with_thread(true)
            .render(&rec);
        assert_eq!(line, "[WARN ] (main) [db] slow query");
    }

    #[test]
    fn test_invalid_custom_timestamp_still_renders() {
        let line = TextLayout::new()
            .with_timestamp_format(TimestampFormat::Custom("%Q".to_string()))
            .render(&record());
        assert_eq!(line, "[2025-01-08T10:30:45.000Z] [WARN ] [db] slow query");
    }
}
