//! Core logger types and traits

pub mod arg;
pub mod error;
pub mod layout;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod overflow_policy;
pub mod record;
pub mod severity;
pub mod sink;
pub mod template;
pub mod timestamp;

pub use arg::Arg;
pub use error::{LoggerError, Result};
pub use layout::TextLayout;
pub use level::LevelHandle;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use overflow_policy::{OverflowCallback, OverflowPolicy};
pub use record::Record;
pub use severity::Severity;
pub use sink::Sink;
pub use timestamp::TimestampFormat;
