//! In-memory sink that keeps every record it accepts

use crate::core::{Record, Result, Severity, Sink};
use parking_lot::Mutex;

/// Captures records for later inspection
///
/// Useful in tests and for hosts that poll recent log lines. With a capacity
/// set, the oldest records are evicted once it is reached.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
    capacity: Option<usize>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep at most `capacity` records, evicting the oldest
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Mutex::new(Vec::with_capacity(capacity)),
            capacity: Some(capacity),
        }
    }

    /// Snapshot of the captured records in arrival order
    pub fn records(&self) -> Vec<Record> {
        self.records.lock().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.records.lock().iter().map(|r| r.message.clone()).collect()
    }

    pub fn count_at(&self, severity: Severity) -> usize {
        self.records
            .lock()
            .iter()
            .filter(|r| r.severity == severity)
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Remove and return everything captured so far
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.records.lock())
    }

    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Sink for MemorySink {
    fn accept(&self, record: &Record) -> Result<()> {
        let mut records = self.records.lock();
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Ok(());
            }
            if records.len() >= capacity {
                let overflow = records.len() + 1 - capacity;
                records.drain(..overflow);
            }
        }
        records.push(record.clone());
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captures_in_order() {
        let sink = MemorySink::new();
        for i in 0..3 {
            sink.accept(&Record::new(Severity::Info, "t", &format!("m{}", i)))
                .unwrap();
        }
        assert_eq!(sink.messages(), vec!["m0", "m1", "m2"]);
        assert_eq!(sink.count_at(Severity::Info), 3);
        assert_eq!(sink.count_at(Severity::Error), 0);
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let sink = MemorySink::with_capacity(2);
        for i in 0..5 {
            sink.accept(&Record::new(Severity::Warn, "t", &format!("m{}", i)))
                .unwrap();
        }
        assert_eq!(sink.messages(), vec!["m3", "m4"]);
    }

    #[test]
    fn test_take_empties() {
        let sink = MemorySink::new();
        sink.accept(&Record::new(Severity::Debug, "t", "x")).unwrap();
        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
    }
}
