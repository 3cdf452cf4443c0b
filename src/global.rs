//! Process-wide facade with the host-facing function names
//!
//! Hosts that expect free functions (`getLevel`, `info`, `infof`, ...) can
//! install one [`Logger`] here and call through these wrappers. Until a
//! logger is installed every emission is a no-op and [`get_level`] reports
//! the default rank (`INFO = 1`).
//!
//! ```
//! use nlog::{global, Arg, Logger, Severity};
//!
//! let logger = Logger::builder().min_level(Severity::Warn).build();
//! if global::install(logger).is_ok() {
//!     assert_eq!(global::get_level(), 2);
//! }
//! global::errorf("db", "failed after %d ms", &[Arg::from(120)]);
//! ```

use crate::core::{Arg, Logger, LoggerError, Result, Severity};
use std::sync::OnceLock;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide logger; fails if one is already installed
pub fn install(logger: Logger) -> Result<()> {
    GLOBAL.set(logger).map_err(|_| LoggerError::AlreadyInstalled)
}

pub fn logger() -> Option<&'static Logger> {
    GLOBAL.get()
}

/// Numeric rank of the current level (`DEBUG = 0` ... `ERROR = 3`)
pub fn get_level() -> u8 {
    GLOBAL
        .get()
        .map_or(Severity::default(), Logger::get_level)
        .rank()
}

/// Change the installed logger's level; also validates when none is installed
pub fn set_level_rank(rank: u8) -> Result<()> {
    match GLOBAL.get() {
        Some(logger) => logger.set_level_rank(rank),
        None => Severity::from_rank(rank).map(|_| ()),
    }
}

macro_rules! forward {
    ($($plain:ident, $formatted:ident;)*) => {
        $(
            pub fn $plain(tag: &str, text: &str) {
                if let Some(logger) = GLOBAL.get() {
                    logger.$plain(tag, text);
                }
            }

            pub fn $formatted(tag: &str, text: &str, args: &[Arg]) {
                if let Some(logger) = GLOBAL.get() {
                    logger.$formatted(tag, text, args);
                }
            }
        )*
    };
}

forward! {
    debug, debugf;
    info, infof;
    warn, warnf;
    warning, warningf;
    error, errorf;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::MemorySink;
    use std::sync::Arc;

    // The only test in the crate that touches the process-wide slot
    #[test]
    fn test_global_lifecycle() {
        assert!(set_level_rank(9).unwrap_err().is_invalid_argument());

        let memory = Arc::new(MemorySink::new());
        let installed = Logger::builder()
            .min_level(Severity::Warn)
            .sink_arc(memory.clone())
            .build();
        install(installed).unwrap();
        assert!(matches!(
            install(Logger::new()),
            Err(LoggerError::AlreadyInstalled)
        ));

        assert_eq!(get_level(), 2);
        info("db", "connecting");
        warning("db", "slow query");
        errorf("db", "failed after %d ms", &[Arg::from(120)]);
        assert_eq!(memory.messages(), vec!["slow query", "failed after 120 ms"]);

        assert!(set_level_rank(7).is_err());
        assert_eq!(get_level(), 2);
        set_level_rank(0).unwrap();
        debugf("db", "pool size %d", &[Arg::from(4)]);
        assert_eq!(memory.len(), 3);
        assert!(logger().is_some());
    }
}
