//! Queue-backed sink that moves delivery onto a worker thread
//!
//! Emission through the logger stays synchronous: `accept` only enqueues.
//! A single worker drains the bounded queue in FIFO order, so records from
//! one producer thread reach the wrapped sink in the order they were logged.

use crate::core::{
    LoggerError, LoggerMetrics, OverflowCallback, OverflowPolicy, Record, Result, Severity, Sink,
};
use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender, TrySendError};
use parking_lot::{Mutex, RwLock};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Default time allowed for the worker to drain on drop
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

const BATCH_SIZE: usize = 50;
const POLL_INTERVAL: Duration = Duration::from_millis(1);

pub struct AsyncSink {
    name: String,
    capacity: usize,
    sender: RwLock<Option<Sender<Record>>>,
    worker: Mutex<Option<thread::JoinHandle<()>>>,
    inner: Arc<dyn Sink>,
    pending: Arc<AtomicUsize>,
    metrics: Arc<LoggerMetrics>,
    overflow_policy: OverflowPolicy,
    on_overflow: Option<OverflowCallback>,
}

impl AsyncSink {
    /// Wrap `inner` behind a queue of `capacity` records with the default policy
    pub fn new(inner: Arc<dyn Sink>, capacity: usize) -> Result<Self> {
        Self::builder(inner).capacity(capacity).build()
    }

    pub fn builder(inner: Arc<dyn Sink>) -> AsyncSinkBuilder {
        AsyncSinkBuilder::new(inner)
    }

    /// Delivery counters for the wrapped sink plus overflow drops
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Records enqueued but not yet handed to the wrapped sink
    pub fn pending(&self) -> usize {
        self.pending.load(Ordering::Acquire)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn overflow_policy(&self) -> &OverflowPolicy {
        &self.overflow_policy
    }

    /// Wait up to `timeout` for the queue to drain, then flush the wrapped sink
    pub fn flush_within(&self, timeout: Duration) -> Result<()> {
        let start = Instant::now();
        while self.pending() > 0 {
            if start.elapsed() >= timeout {
                return Err(LoggerError::writer(format!(
                    "flush timed out after {:?} with {} records pending",
                    timeout,
                    self.pending()
                )));
            }
            thread::sleep(POLL_INTERVAL);
        }
        self.inner.flush()
    }

    /// Stop accepting records and wait for the worker to drain the queue
    ///
    /// Returns `true` if the worker finished within `timeout`. Records
    /// accepted after shutdown fail with `ChannelSendError`.
    pub fn shutdown(&self, timeout: Duration) -> bool {
        drop(self.sender.write().take());

        let Some(handle) = self.worker.lock().take() else {
            return true;
        };

        let start = Instant::now();
        loop {
            if handle.is_finished() {
                if let Err(e) = handle.join() {
                    eprintln!("[LOGGER ERROR] Async worker thread panicked during shutdown: {:?}", e);
                    return false;
                }
                break;
            }

            if start.elapsed() >= timeout {
                eprintln!(
                    "[LOGGER WARNING] Async worker for '{}' did not finish within {:?}. \
                     Some records may be lost.",
                    self.name, timeout
                );
                return false;
            }

            thread::sleep(Duration::from_millis(10));
        }

        if let Err(e) = self.inner.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush '{}' during shutdown: {}", self.name, e);
            return false;
        }
        true
    }

    fn spawn_worker(
        name: &str,
        receiver: Receiver<Record>,
        inner: Arc<dyn Sink>,
        pending: Arc<AtomicUsize>,
        metrics: Arc<LoggerMetrics>,
    ) -> Result<thread::JoinHandle<()>> {
        let handle = thread::Builder::new()
            .name(format!("nlog-async-{}", name))
            .spawn(move || {
                let mut batch = Vec::with_capacity(BATCH_SIZE);

                // recv fails only once every sender is gone and the queue is empty
                while let Ok(record) = receiver.recv() {
                    batch.push(record);
                    while batch.len() < BATCH_SIZE {
                        match receiver.try_recv() {
                            Ok(record) => batch.push(record),
                            Err(_) => break,
                        }
                    }

                    Self::process_batch(inner.as_ref(), &batch, &metrics);
                    pending.fetch_sub(batch.len(), Ordering::AcqRel);
                    batch.clear();
                }
            })
            .map_err(|e| LoggerError::io_operation("spawning async sink worker", name, e))?;
        Ok(handle)
    }

    /// Deliver a batch, isolating panics so one bad record cannot kill the worker
    fn process_batch(inner: &dyn Sink, batch: &[Record], metrics: &LoggerMetrics) {
        for record in batch {
            let result =
                std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| inner.accept(record)));
            match result {
                Ok(Ok(())) => {
                    metrics.record_delivered();
                }
                Ok(Err(e)) => {
                    metrics.record_sink_failure();
                    eprintln!("[LOGGER ERROR] Sink '{}' failed (async): {}", inner.name(), e);
                }
                Err(_) => {
                    metrics.record_sink_failure();
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked (async). Worker continues.",
                        inner.name()
                    );
                }
            }
        }

        if let Err(e) = inner.flush() {
            eprintln!("[LOGGER ERROR] Sink '{}' flush failed (async): {}", inner.name(), e);
        }
    }

    /// Handle a full queue according to the policy; `ERROR` records always wait
    fn handle_overflow(&self, sender: &Sender<Record>, record: Record) -> Result<()> {
        if record.severity == Severity::Error {
            return self.send_blocking(sender, record);
        }

        match &self.overflow_policy {
            OverflowPolicy::DropNewest => {
                self.pending.fetch_sub(1, Ordering::AcqRel);
                self.metrics.record_dropped();
                Ok(())
            }
            OverflowPolicy::Block => self.send_blocking(sender, record),
            OverflowPolicy::BlockWithTimeout(timeout) => {
                match sender.send_timeout(record, *timeout) {
                    Ok(()) => Ok(()),
                    Err(SendTimeoutError::Timeout(_)) => {
                        self.alert_and_drop();
                        Ok(())
                    }
                    Err(SendTimeoutError::Disconnected(_)) => {
                        self.pending.fetch_sub(1, Ordering::AcqRel);
                        Err(LoggerError::ChannelSendError)
                    }
                }
            }
            OverflowPolicy::AlertAndDrop => {
                self.alert_and_drop();
                Ok(())
            }
        }
    }

    fn send_blocking(&self, sender: &Sender<Record>, record: Record) -> Result<()> {
        sender.send(record).map_err(|_| {
            self.pending.fetch_sub(1, Ordering::AcqRel);
            LoggerError::ChannelSendError
        })
    }

    fn alert_and_drop(&self) {
        self.pending.fetch_sub(1, Ordering::AcqRel);
        let dropped_count = self.metrics.record_dropped();

        // Alert on first drop and periodically thereafter
        if dropped_count == 0 || (dropped_count + 1) % 1000 == 0 {
            eprintln!(
                "[LOGGER WARNING] Queue for '{}' full, {} records dropped. \
                 Consider increasing capacity or using a different overflow policy.",
                self.name,
                dropped_count + 1
            );

            if let Some(ref callback) = self.on_overflow {
                callback(dropped_count + 1);
            }
        }
    }
}

impl Sink for AsyncSink {
    fn accept(&self, record: &Record) -> Result<()> {
        let Some(sender) = self.sender.read().clone() else {
            return Err(LoggerError::ChannelSendError);
        };

        self.pending.fetch_add(1, Ordering::AcqRel);
        match sender.try_send(record.clone()) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(record)) => self.handle_overflow(&sender, record),
            Err(TrySendError::Disconnected(_)) => {
                self.pending.fetch_sub(1, Ordering::AcqRel);
                Err(LoggerError::ChannelSendError)
            }
        }
    }

    /// Wait for the queue to drain, then flush the wrapped sink
    fn flush(&self) -> Result<()> {
        self.flush_within(DEFAULT_SHUTDOWN_TIMEOUT)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl Drop for AsyncSink {
    fn drop(&mut self) {
        self.shutdown(DEFAULT_SHUTDOWN_TIMEOUT);

        let dropped = self.metrics.dropped();
        if dropped > 0 {
            eprintln!(
                "[LOGGER WARNING] Async sink '{}' shutting down with {} dropped records",
                self.name, dropped
            );
        }
    }
}

/// Builder for [`AsyncSink`]
///
/// ```
/// use nlog::prelude::*;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let sink = AsyncSink::builder(Arc::new(MemorySink::new()))
///     .capacity(256)
///     .overflow_policy(OverflowPolicy::BlockWithTimeout(Duration::from_millis(50)))
///     .on_overflow(Arc::new(|dropped| eprintln!("{} records dropped", dropped)))
///     .build()
///     .unwrap();
/// assert_eq!(sink.capacity(), 256);
/// ```
pub struct AsyncSinkBuilder {
    inner: Arc<dyn Sink>,
    capacity: usize,
    overflow_policy: OverflowPolicy,
    on_overflow: Option<OverflowCallback>,
}

impl AsyncSinkBuilder {
    pub fn new(inner: Arc<dyn Sink>) -> Self {
        Self {
            inner,
            capacity: 1024,
            overflow_policy: OverflowPolicy::default(),
            on_overflow: None,
        }
    }

    /// Queue length; zero is rejected by `build`
    #[must_use = "builder methods return a new value"]
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn on_overflow(mut self, callback: OverflowCallback) -> Self {
        self.on_overflow = Some(callback);
        self
    }

    pub fn build(self) -> Result<AsyncSink> {
        if self.capacity == 0 {
            return Err(LoggerError::invalid_argument(
                "capacity",
                "async queue capacity must be at least 1",
            ));
        }

        let name = format!("async({})", self.inner.name());
        let (sender, receiver) = bounded(self.capacity);
        let pending = Arc::new(AtomicUsize::new(0));
        let metrics = Arc::new(LoggerMetrics::new());

        let worker = AsyncSink::spawn_worker(
            self.inner.name(),
            receiver,
            Arc::clone(&self.inner),
            Arc::clone(&pending),
            Arc::clone(&metrics),
        )?;

        Ok(AsyncSink {
            name,
            capacity: self.capacity,
            sender: RwLock::new(Some(sender)),
            worker: Mutex::new(Some(worker)),
            inner: self.inner,
            pending,
            metrics,
            overflow_policy: self.overflow_policy,
            on_overflow: self.on_overflow,
        })
    }
}
