//! Main logger implementation

use super::{
    arg::Arg,
    error::Result,
    level::LevelHandle,
    metrics::LoggerMetrics,
    record::Record,
    severity::Severity,
    sink::Sink,
    template,
};
use parking_lot::RwLock;
use std::any::Any;
use std::sync::Arc;

type SinkList = Arc<Vec<Arc<dyn Sink>>>;

/// Level-gated logger with tagged plain and formatted entry points
///
/// Every entry point checks the record's severity against the shared
/// [`LevelHandle`] first. Calls below the threshold return before any
/// formatting happens; admitted calls are turned into a [`Record`] and handed
/// to each registered [`Sink`]. Logging never fails and never panics into the
/// caller.
///
/// # Example
///
/// ```
/// use nlog::prelude::*;
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemorySink::new());
/// let logger = Logger::builder()
///     .min_level(Severity::Warn)
///     .sink_arc(memory.clone())
///     .build();
///
/// logger.info("db", "connecting");
/// logger.errorf("db", "failed after %d ms", &[Arg::from(120)]);
///
/// let records = memory.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].message, "failed after 120 ms");
/// ```
pub struct Logger {
    level: LevelHandle,
    sinks: RwLock<SinkList>,
    metrics: Arc<LoggerMetrics>,
}

impl Logger {
    /// Logger at `INFO` with no sinks
    #[must_use]
    pub fn new() -> Self {
        Self::with_level_handle(LevelHandle::default())
    }

    /// Logger that follows an existing, possibly shared, level handle
    #[must_use]
    pub fn with_level_handle(level: LevelHandle) -> Self {
        Self {
            level,
            sinks: RwLock::new(Arc::new(Vec::new())),
            metrics: Arc::new(LoggerMetrics::new()),
        }
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    // ------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------

    /// Current threshold; records below it are discarded
    #[inline]
    pub fn get_level(&self) -> Severity {
        self.level.get()
    }

    pub fn set_level(&self, level: Severity) {
        self.level.set(level);
    }

    /// Set the threshold from its numeric rank (`0..=3`)
    ///
    /// Out-of-range ranks fail with `InvalidArgument` and keep the old level.
    pub fn set_level_rank(&self, rank: u8) -> Result<()> {
        self.level.set_rank(rank)
    }

    /// Set the threshold from a level name; unknown names keep the old level
    pub fn set_level_str(&self, name: &str) -> Result<()> {
        self.level.set_str(name)
    }

    pub fn level_handle(&self) -> &LevelHandle {
        &self.level
    }

    pub fn register_sink(&self, sink: Arc<dyn Sink>) {
        let mut sinks = self.sinks.write();
        let mut next = Vec::with_capacity(sinks.len() + 1);
        next.extend(sinks.iter().cloned());
        next.push(sink);
        *sinks = Arc::new(next);
    }

    pub fn clear_sinks(&self) {
        *self.sinks.write() = Arc::new(Vec::new());
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every sink, reporting the first failure
    pub fn flush(&self) -> Result<()> {
        let sinks = self.snapshot();
        let mut first_error = None;
        for sink in sinks.iter() {
            if let Err(e) = sink.flush() {
                eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.name(), e);
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    // ------------------------------------------------------------------
    // Emission
    // ------------------------------------------------------------------

    /// Whether a call at `severity` would currently be emitted
    #[inline]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        self.level.admits(severity)
    }

    pub fn log(&self, severity: Severity, tag: &str, text: &str) {
        if !self.gate(severity) {
            return;
        }
        self.dispatch(Record::new(severity, tag, text));
    }

    /// Formatted emission; `args` are rendered only if the call is admitted
    pub fn logf(&self, severity: Severity, tag: &str, text: &str, args: &[Arg]) {
        if !self.gate(severity) {
            return;
        }
        let message = template::render(text, args);
        self.dispatch(Record::new(severity, tag, &message));
    }

    /// Like [`Logger::logf`], but the arguments themselves are built only
    /// when the call is admitted
    pub fn logf_with<F, A>(&self, severity: Severity, tag: &str, text: &str, args: F)
    where
        F: FnOnce() -> A,
        A: AsRef<[Arg]>,
    {
        if !self.gate(severity) {
            return;
        }
        let message = template::render(text, args().as_ref());
        self.dispatch(Record::new(severity, tag, &message));
    }

    #[inline]
    pub fn debug(&self, tag: &str, text: &str) {
        self.log(Severity::Debug, tag, text);
    }

    #[inline]
    pub fn debugf(&self, tag: &str, text: &str, args: &[Arg]) {
        self.logf(Severity::Debug, tag, text, args);
    }

    #[inline]
    pub fn info(&self, tag: &str, text: &str) {
        self.log(Severity::Info, tag, text);
    }

    #[inline]
    pub fn infof(&self, tag: &str, text: &str, args: &[Arg]) {
        self.logf(Severity::Info, tag, text, args);
    }

    #[inline]
    pub fn warn(&self, tag: &str, text: &str) {
        self.log(Severity::Warn, tag, text);
    }

    #[inline]
    pub fn warnf(&self, tag: &str, text: &str, args: &[Arg]) {
        self.logf(Severity::Warn, tag, text, args);
    }

    /// Same as [`Logger::warn`]
    #[inline]
    pub fn warning(&self, tag: &str, text: &str) {
        self.log(Severity::Warn, tag, text);
    }

    /// Same as [`Logger::warnf`]
    #[inline]
    pub fn warningf(&self, tag: &str, text: &str, args: &[Arg]) {
        self.logf(Severity::Warn, tag, text, args);
    }

    #[inline]
    pub fn error(&self, tag: &str, text: &str) {
        self.log(Severity::Error, tag, text);
    }

    #[inline]
    pub fn errorf(&self, tag: &str, text: &str, args: &[Arg]) {
        self.logf(Severity::Error, tag, text, args);
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    #[inline]
    fn gate(&self, severity: Severity) -> bool {
        if self.level.admits(severity) {
            self.metrics.record_admitted();
            true
        } else {
            self.metrics.record_filtered();
            false
        }
    }

    /// Clone the current sink list; the lock is released before returning
    fn snapshot(&self) -> SinkList {
        Arc::clone(&*self.sinks.read())
    }

    fn dispatch(&self, record: Record) {
        let sinks = self.snapshot();
        for sink in sinks.iter() {
            Self::deliver(sink.as_ref(), &record, &self.metrics);
        }
    }

    /// Hand one record to one sink, containing both errors and panics
    fn deliver(sink: &dyn Sink, record: &Record, metrics: &LoggerMetrics) {
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| sink.accept(record)));

        match result {
            Ok(Ok(())) => {
                metrics.record_delivered();
            }
            Ok(Err(e)) => {
                metrics.record_sink_failure();
                eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
            }
            Err(panic_info) => {
                metrics.record_sink_failure();
                eprintln!(
                    "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                     Other sinks continue to function.",
                    sink.name(),
                    panic_message(&*panic_info)
                );
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.get_level())
            .field("sinks", &self.sink_count())
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use nlog::prelude::*;
///
/// let logger = Logger::builder()
///     .min_level(Severity::Debug)
///     .sink(MemorySink::new())
///     .build();
/// assert_eq!(logger.get_level(), Severity::Debug);
/// ```
pub struct LoggerBuilder {
    min_level: Option<Severity>,
    level_handle: Option<LevelHandle>,
    sinks: Vec<Arc<dyn Sink>>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            min_level: None,
            level_handle: None,
            sinks: Vec::new(),
        }
    }

    /// Initial threshold; when combined with `level_handle` it is written
    /// into the shared handle on `build`
    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: Severity) -> Self {
        self.min_level = Some(level);
        self
    }

    /// Follow an existing level handle instead of a private one
    #[must_use = "builder methods return a new value"]
    pub fn level_handle(mut self, handle: LevelHandle) -> Self {
        self.level_handle = Some(handle);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Arc::new(sink));
        self
    }

    /// Register a sink the caller keeps a handle to
    #[must_use = "builder methods return a new value"]
    pub fn sink_arc(mut self, sink: Arc<dyn Sink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn build(self) -> Logger {
        let handle = self.level_handle.unwrap_or_default();
        if let Some(level) = self.min_level {
            handle.set(level);
        }

        let logger = Logger::with_level_handle(handle);
        *logger.sinks.write() = Arc::new(self.sinks);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
