//! # nlog
//!
//! A leveled, tagged logging core.
//!
//! ## Features
//!
//! - **Level filtering**: `DEBUG < INFO < WARN < ERROR`, checked with a single
//!   atomic load before any work is done
//! - **Tagged entry points**: `info`, `warn`/`warning`, `error`, `debug`, each
//!   with a printf-style formatted variant (`infof`, ...)
//! - **Lazy formatting**: arguments of filtered calls are never rendered
//! - **Pluggable sinks**: console, file, JSON lines, memory, async queue, or
//!   any closure
//! - **Failure isolation**: a failing or panicking sink never reaches the caller
//!
//! ```
//! use nlog::prelude::*;
//! use std::sync::Arc;
//!
//! let memory = Arc::new(MemorySink::new());
//! let logger = Logger::builder()
//!     .min_level(Severity::Warn)
//!     .sink_arc(memory.clone())
//!     .build();
//!
//! logger.info("db", "connecting");
//! logger.warn("db", "slow query");
//! assert_eq!(memory.len(), 1);
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::{AsyncSink, JsonSink, MemorySink};
    pub use crate::core::{
        Arg, LevelHandle, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OverflowCallback,
        OverflowPolicy, Record, Result, Severity, Sink, TextLayout, TimestampFormat,
    };
}

#[cfg(feature = "console")]
pub use sinks::ConsoleSink;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::{AsyncSink, JsonSink, MemorySink, DEFAULT_SHUTDOWN_TIMEOUT};
pub use crate::core::{
    Arg, LevelHandle, Logger, LoggerBuilder, LoggerError, LoggerMetrics, OverflowCallback,
    OverflowPolicy, Record, Result, Severity, Sink, TextLayout, TimestampFormat,
};
