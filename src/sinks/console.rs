//! Console sink implementation

use crate::core::{Record, Result, Severity, Sink, TextLayout, TimestampFormat};
use colored::Colorize;
use std::io::Write;

/// Writes one text line per record; `ERROR` goes to stderr, the rest to stdout
pub struct ConsoleSink {
    use_colors: bool,
    layout: TextLayout,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            layout: TextLayout::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            layout: TextLayout::default(),
        }
    }

    #[must_use]
    pub fn with_layout(mut self, layout: TextLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Set the timestamp format for this sink
    ///
    /// ```
    /// use nlog::sinks::ConsoleSink;
    /// use nlog::TimestampFormat;
    ///
    /// let sink = ConsoleSink::new().with_timestamp_format(TimestampFormat::Iso8601Micros);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.layout.timestamp = format;
        self
    }

    fn format_line(&self, record: &Record) -> String {
        let level = format!("{:5}", record.severity);
        if self.use_colors {
            let colored = level.color(record.severity.color_code()).to_string();
            self.layout.render_with_level(record, &colored)
        } else {
            self.layout.render_with_level(record, &level)
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn accept(&self, record: &Record) -> Result<()> {
        let line = self.format_line(record);

        // Locking the stream keeps concurrent lines from interleaving
        match record.severity {
            Severity::Error => writeln!(std::io::stderr().lock(), "{}", line)?,
            _ => writeln!(std::io::stdout().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_line() {
        let sink = ConsoleSink::with_colors(false).with_timestamp_format(TimestampFormat::Omit);
        let line = sink.format_line(&Record::new(Severity::Info, "net", "listening"));
        assert_eq!(line, "[INFO ] [net] listening");
    }

    #[test]
    fn test_accept_does_not_fail() {
        let sink = ConsoleSink::new();
        sink.accept(&Record::new(Severity::Error, "net", "reset")).unwrap();
        sink.accept(&Record::new(Severity::Debug, "net", "poll")).unwrap();
        sink.flush().unwrap();
    }
}
