//! Logger metrics for observability
//!
//! Counters for monitoring logger health: how many calls were admitted or
//! filtered by the level gate, how many sink deliveries succeeded, and how
//! many failed.

use std::sync::atomic::{AtomicU64, Ordering};

/// Metrics for logger observability
///
/// # Example
///
/// ```
/// use nlog::LoggerMetrics;
///
/// let metrics = LoggerMetrics::new();
///
/// metrics.record_admitted();
/// metrics.record_filtered();
///
/// assert_eq!(metrics.admitted(), 1);
/// assert_eq!(metrics.filtered(), 1);
/// ```
#[derive(Debug)]
pub struct LoggerMetrics {
    /// Calls that passed the level gate
    admitted: AtomicU64,

    /// Calls discarded by the level gate
    filtered: AtomicU64,

    /// Successful sink deliveries
    delivered: AtomicU64,

    /// Sink deliveries that returned an error or panicked
    sink_failures: AtomicU64,

    /// Records dropped by an async queue
    dropped: AtomicU64,
}

impl LoggerMetrics {
    pub const fn new() -> Self {
        Self {
            admitted: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
            delivered: AtomicU64::new(0),
            sink_failures: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn admitted(&self) -> u64 {
        self.admitted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn sink_failures(&self) -> u64 {
        self.sink_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    /// Each `record_*` returns the previous value
    #[inline]
    pub fn record_admitted(&self) -> u64 {
        self.admitted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_sink_failure(&self) -> u64 {
        self.sink_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped(&self) -> u64 {
        self.dropped.fetch_add(1, Ordering::Relaxed)
    }

    /// Failed deliveries as a percentage (0.0 - 100.0) of all attempts
    pub fn failure_rate(&self) -> f64 {
        let failed = self.sink_failures() as f64;
        let total = self.delivered() as f64 + failed;
        if total == 0.0 {
            0.0
        } else {
            (failed / total) * 100.0
        }
    }

    pub fn reset(&self) {
        self.admitted.store(0, Ordering::Relaxed);
        self.filtered.store(0, Ordering::Relaxed);
        self.delivered.store(0, Ordering::Relaxed);
        self.sink_failures.store(0, Ordering::Relaxed);
        self.dropped.store(0, Ordering::Relaxed);
    }
}

impl Default for LoggerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for LoggerMetrics {
    /// Create a snapshot of the current metrics values
    fn clone(&self) -> Self {
        Self {
            admitted: AtomicU64::new(self.admitted()),
            filtered: AtomicU64::new(self.filtered()),
            delivered: AtomicU64::new(self.delivered()),
            sink_failures: AtomicU64::new(self.sink_failures()),
            dropped: AtomicU64::new(self.dropped()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.admitted(), 0);
        assert_eq!(metrics.filtered(), 0);
        assert_eq!(metrics.delivered(), 0);
        assert_eq!(metrics.sink_failures(), 0);
        assert_eq!(metrics.dropped(), 0);
    }

    #[test]
    fn test_record_returns_previous() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.record_filtered(), 0);
        assert_eq!(metrics.record_filtered(), 1);
        assert_eq!(metrics.filtered(), 2);
    }

    #[test]
    fn test_failure_rate() {
        let metrics = LoggerMetrics::new();
        assert_eq!(metrics.failure_rate(), 0.0);

        for _ in 0..90 {
            metrics.record_delivered();
        }
        for _ in 0..10 {
            metrics.record_sink_failure();
        }

        let rate = metrics.failure_rate();
        assert!((9.9..=10.1).contains(&rate), "Failure rate was {}", rate);
    }

    #[test]
    fn test_reset_and_snapshot() {
        let metrics = LoggerMetrics::new();
        metrics.record_admitted();
        metrics.record_dropped();

        let snapshot = metrics.clone();
        metrics.reset();

        assert_eq!(metrics.admitted(), 0);
        assert_eq!(metrics.dropped(), 0);
        assert_eq!(snapshot.admitted(), 1);
        assert_eq!(snapshot.dropped(), 1);
    }
}
