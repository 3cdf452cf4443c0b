//! Overflow policies for the async sink queue
//!
//! When an `AsyncSink` queue is full, the policy decides what happens to the
//! incoming record. `ERROR` records are never dropped: they always wait for
//! queue space regardless of policy.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Policy for handling a full async queue
///
/// # Example
///
/// ```
/// use nlog::OverflowPolicy;
/// use std::time::Duration;
///
/// let policy = OverflowPolicy::default();
/// assert_eq!(policy, OverflowPolicy::AlertAndDrop);
///
/// let policy = OverflowPolicy::BlockWithTimeout(Duration::from_millis(100));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Drop the incoming record silently; only metrics notice
    DropNewest,

    /// Wait until the worker frees space
    Block,

    /// Wait up to the timeout, then drop with an alert
    BlockWithTimeout(Duration),

    /// Drop the incoming record, alert on stderr and through the callback
    #[default]
    AlertAndDrop,
}

impl fmt::Display for OverflowPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowPolicy::DropNewest => write!(f, "DropNewest"),
            OverflowPolicy::Block => write!(f, "Block"),
            OverflowPolicy::BlockWithTimeout(d) => write!(f, "BlockWithTimeout({:?})", d),
            OverflowPolicy::AlertAndDrop => write!(f, "AlertAndDrop"),
        }
    }
}

/// Called with the running total of dropped records
pub type OverflowCallback = Arc<dyn Fn(u64) + Send + Sync>;
