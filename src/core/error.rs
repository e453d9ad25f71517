//! Error types for the logging engine

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
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
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Formatter error with formatter name
    #[error("Formatter error ({format_type}): {message}")]
    Formatter {
        format_type: String,
        message: String,
    },

    /// A hook refused an entry
    #[error("Hook '{hook}' failed: {message}")]
    Hook { hook: String, message: String },

    /// A segment template could not be compiled or rendered
    #[error("Template error in {template:?}: {message}")]
    Template { template: String, message: String },
}

impl LoggerError {
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

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Formatter {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// Create a hook error
    pub fn hook(hook: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Hook {
            hook: hook.into(),
            message: message.into(),
        }
    }

    /// Create a template error
    pub fn template(template: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::Template {
            template: template.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = LoggerError::formatter("text", "bad timestamp");
        assert!(matches!(err, LoggerError::Formatter { .. }));

        let err = LoggerError::hook("audit", "sink closed");
        assert!(matches!(err, LoggerError::Hook { .. }));

        let err = LoggerError::template("{{.Lvl", "unterminated action");
        assert!(matches!(err, LoggerError::Template { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = LoggerError::formatter("json", "Invalid field type");
        assert_eq!(err.to_string(), "Formatter error (json): Invalid field type");

        let err = LoggerError::hook("audit", "refused");
        assert_eq!(err.to_string(), "Hook 'audit' failed: refused");
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = LoggerError::io_operation("writing record", "sink rejected bytes", io_err);

        assert!(matches!(err, LoggerError::IoOperation { .. }));
        assert!(err.to_string().contains("writing record"));
        assert!(err.to_string().contains("sink rejected bytes"));
    }
}
