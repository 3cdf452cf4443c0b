//! Sink trait for record destinations

use super::{error::Result, record::Record};

/// Receives every record that passes a logger's level gate
///
/// Sinks are shared between threads and called without any logger lock held,
/// so implementations synchronize their own state.
pub trait Sink: Send + Sync {
    fn accept(&self, record: &Record) -> Result<()>;

    fn flush(&self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "sink"
    }
}

impl<F> Sink for F
where
    F: Fn(&Record) -> Result<()> + Send + Sync,
{
    fn accept(&self, record: &Record) -> Result<()> {
        self(record)
    }

    fn name(&self) -> &str {
        "fn"
    }
}
