//! Error types for the logging core

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Rejected configuration value; state is left unchanged
    #[error("Invalid argument for {parameter}: {message}")]
    InvalidArgument { parameter: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Queue full with buffer details
    #[error("Log queue full: {current}/{max} records buffered")]
    QueueFull { current: usize, max: usize },

    /// Channel send error
    #[error("Failed to send log record to async worker")]
    ChannelSendError,

    /// Writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// A process-wide logger was already installed
    #[error("A global logger is already installed")]
    AlreadyInstalled,

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl LoggerError {
    /// Create an invalid argument error
    pub fn invalid_argument(parameter: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidArgument {
            parameter: parameter.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a queue full error with buffer details
    pub fn queue_full(current: usize, max: usize) -> Self {
        LoggerError::QueueFull { current, max }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        LoggerError::WriterError(msg.into())
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        LoggerError::Other(msg.into())
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, LoggerError::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::invalid_argument("level", "rank 7 is out of range");
        assert!(err.is_invalid_argument());

        let err = LoggerError::queue_full(10, 10);
        assert!(matches!(err, LoggerError::QueueFull { .. }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::invalid_argument("level", "rank 7 is out of range");
        assert_eq!(
            err.to_string(),
            "Invalid argument for level: rank 7 is out of range"
        );

        let err = LoggerError::queue_full(100, 1000);
        assert_eq!(err.to_string(), "Log queue full: 100/1000 records buffered");

        assert_eq!(
            LoggerError::AlreadyInstalled.to_string(),
            "A global logger is already installed"
        );
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = LoggerError::io_operation("opening log file", "cannot open for append", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("opening log file"));
        assert!(err.to_string().contains("cannot open for append"));
    }
}
