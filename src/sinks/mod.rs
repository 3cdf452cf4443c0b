//! Sink implementations

pub mod async_queue;
#[cfg(feature = "console")]
pub mod console;
#[cfg(feature = "file")]
pub mod file;
pub mod json;
pub mod memory;

pub use async_queue::{AsyncSink, AsyncSinkBuilder, DEFAULT_SHUTDOWN_TIMEOUT};
#[cfg(feature = "console")]
pub use console::ConsoleSink;
#[cfg(feature = "file")]
pub use file::FileSink;
pub use json::JsonSink;
pub use memory::MemorySink;

pub use crate::core::Sink;
