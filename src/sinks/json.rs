//! JSON lines sink for structured logging

use crate::core::{Record, Result, Sink};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes each record as a single-line JSON object (JSONL)
///
/// Compatible with log aggregation tools like ELK, Loki, etc.
pub struct JsonSink<W: Write + Send> {
    writer: Mutex<W>,
    pretty: bool,
}

impl<W: Write + Send> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            pretty: false,
        }
    }

    /// Multi-line output for humans; no longer one record per line
    #[must_use]
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Recover the underlying writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl JsonSink<BufWriter<File>> {
    pub fn file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write + Send> Sink for JsonSink<W> {
    fn accept(&self, record: &Record) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };

        writeln!(self.writer.lock(), "{}", json)?;
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        self.writer.lock().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "json"
    }
}
