//! Logging macros for the formatted entry points.
//!
//! Each argument is converted with `Arg::from`, and the conversion itself is
//! deferred until the level gate admits the call.
//!
//! # Examples
//!
//! ```
//! use nlog::prelude::*;
//! use nlog::{errorf, infof};
//!
//! let logger = Logger::new();
//!
//! infof!(logger, "http", "server started");
//! infof!(logger, "http", "listening on port %d", 8080);
//! errorf!(logger, "db", "query %s failed after %d ms", "select_user", 120);
//! ```

/// Log a formatted message at an explicit severity.
///
/// ```
/// # use nlog::prelude::*;
/// # let logger = Logger::new();
/// use nlog::logf;
/// logf!(logger, Severity::Info, "app", "simple message");
/// logf!(logger, Severity::Error, "app", "error code: %d", 500);
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $severity:expr, $tag:expr, $text:expr $(,)?) => {
        $logger.logf($severity, $tag, $text, &[])
    };
    ($logger:expr, $severity:expr, $tag:expr, $text:expr, $($arg:expr),+ $(,)?) => {
        $logger.logf_with($severity, $tag, $text, || [$($crate::Arg::from($arg)),+])
    };
}

/// Log a formatted debug-level message.
///
/// ```
/// # use nlog::prelude::*;
/// # let logger = Logger::new();
/// # logger.set_level(Severity::Debug);
/// use nlog::debugf;
/// debugf!(logger, "cache", "hit ratio %.2f", 0.875);
/// ```
#[macro_export]
macro_rules! debugf {
    ($logger:expr, $tag:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Debug, $tag, $($rest)+)
    };
}

/// Log a formatted info-level message.
///
/// ```
/// # use nlog::prelude::*;
/// # let logger = Logger::new();
/// use nlog::infof;
/// infof!(logger, "app", "processing %d items", 100);
/// ```
#[macro_export]
macro_rules! infof {
    ($logger:expr, $tag:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Info, $tag, $($rest)+)
    };
}

/// Log a formatted warning-level message.
///
/// ```
/// # use nlog::prelude::*;
/// # let logger = Logger::new();
/// use nlog::warnf;
/// warnf!(logger, "net", "retry %d of %d", 3, 5);
/// ```
#[macro_export]
macro_rules! warnf {
    ($logger:expr, $tag:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Warn, $tag, $($rest)+)
    };
}

/// Same as [`warnf!`].
#[macro_export]
macro_rules! warningf {
    ($logger:expr, $tag:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Warn, $tag, $($rest)+)
    };
}

/// Log a formatted error-level message.
///
/// ```
/// # use nlog::prelude::*;
/// # let logger = Logger::new();
/// use nlog::errorf;
/// errorf!(logger, "db", "connection lost: %s", "reset by peer");
/// ```
#[macro_export]
macro_rules! errorf {
    ($logger:expr, $tag:expr, $($rest:tt)+) => {
        $crate::logf!($logger, $crate::Severity::Error, $tag, $($rest)+)
    };
}
