//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<String>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<String>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> String {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()))
            .clone()
    })
}

fn current_thread_name() -> Option<String> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(String::from))
            .clone()
    })
}

/// One admitted log call, built after the level gate passes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub thread_id: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub thread_name: Option<String>,
}

impl Record {
    /// Escape line breaks and tabs so one call always yields one output line.
    /// Backslashes are doubled first.
    fn sanitize(text: &str) -> String {
        if !text.contains(['\\', '\n', '\r', '\t']) {
            return text.to_string();
        }
        text.replace('\\', "\\\\")
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(severity: Severity, tag: &str, message: &str) -> Self {
        Self {
            severity,
            tag: Self::sanitize(tag),
            message: Self::sanitize(message),
            timestamp: Utc::now(),
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Thread name when available, otherwise the thread id
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
