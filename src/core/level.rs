//! Shared, atomically updated level threshold
//!
//! A `LevelHandle` is the configuration object every `Logger` reads on each
//! emission. Cloning the handle shares the threshold, so several loggers can
//! follow one setting while independent handles stay isolated.

use super::error::Result;
use super::severity::Severity;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

#[derive(Clone)]
pub struct LevelHandle {
    rank: Arc<AtomicU8>,
}

impl LevelHandle {
    pub fn new(initial: Severity) -> Self {
        Self {
            rank: Arc::new(AtomicU8::new(initial.rank())),
        }
    }

    /// Current threshold
    #[inline]
    pub fn get(&self) -> Severity {
        match self.rank.load(Ordering::Acquire) {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            _ => Severity::Error,
        }
    }

    #[inline]
    pub fn set(&self, level: Severity) {
        self.rank.store(level.rank(), Ordering::Release);
    }

    /// Set from a numeric rank; out-of-range values leave the threshold untouched
    pub fn set_rank(&self, rank: u8) -> Result<()> {
        let level = Severity::from_rank(rank)?;
        self.set(level);
        Ok(())
    }

    /// Set from a level name such as `"debug"` or `"WARNING"`
    pub fn set_str(&self, name: &str) -> Result<()> {
        let level: Severity = name.parse()?;
        self.set(level);
        Ok(())
    }

    /// Whether a record at `severity` passes the threshold
    #[inline]
    pub fn admits(&self, severity: Severity) -> bool {
        severity.rank() >= self.rank.load(Ordering::Acquire)
    }

    /// Whether two handles share the same underlying threshold
    pub fn shares_with(&self, other: &LevelHandle) -> bool {
        Arc::ptr_eq(&self.rank, &other.rank)
    }
}

impl Default for LevelHandle {
    fn default() -> Self {
        Self::new(Severity::default())
    }
}

impl fmt::Debug for LevelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelHandle")
            .field("level", &self.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_info() {
        assert_eq!(LevelHandle::default().get(), Severity::Info);
    }

    #[test]
    fn test_set_then_get() {
        let handle = LevelHandle::default();
        for level in Severity::ALL {
            handle.set(level);
            assert_eq!(handle.get(), level);
        }
    }

    #[test]
    fn test_invalid_rank_keeps_previous() {
        let handle = LevelHandle::new(Severity::Warn);
        let err = handle.set_rank(9).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(handle.get(), Severity::Warn);

        assert!(handle.set_str("verbose").is_err());
        assert_eq!(handle.get(), Severity::Warn);
    }

    #[test]
    fn test_clones_share_state() {
        let a = LevelHandle::default();
        let b = a.clone();
        let c = LevelHandle::default();

        b.set(Severity::Error);
        assert_eq!(a.get(), Severity::Error);
        assert_eq!(c.get(), Severity::Info);
        assert!(a.shares_with(&b));
        assert!(!a.shares_with(&c));
    }

    #[test]
    fn test_admits() {
        let handle = LevelHandle::new(Severity::Warn);
        assert!(!handle.admits(Severity::Debug));
        assert!(!handle.admits(Severity::Info));
        assert!(handle.admits(Severity::Warn));
        assert!(handle.admits(Severity::Error));
    }
}
