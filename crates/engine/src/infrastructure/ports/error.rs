//! Error types for port operations.

/// Repository operation errors with context for debugging.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    /// Storage operation failed - includes operation name for tracing.
    #[error("Database error in {operation}: {message}")]
    Database {
        operation: &'static str,
        message: String,
    },

    /// Backing store cannot be reached.
    #[error("Repository unavailable: {0}")]
    Unavailable(String),
}

impl RepoError {
    /// Create a Database error with operation context.
    pub fn database(operation: &'static str, message: impl ToString) -> Self {
        Self::Database {
            operation,
            message: message.to_string(),
        }
    }

    /// Create an Unavailable error.
    pub fn unavailable(message: impl ToString) -> Self {
        Self::Unavailable(message.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_names_the_operation() {
        let err = RepoError::database("author.add", "disk full");
        assert_eq!(err.to_string(), "Database error in author.add: disk full");
    }

    #[test]
    fn unavailable_error_message() {
        let err = RepoError::unavailable("connection refused");
        assert_eq!(err.to_string(), "Repository unavailable: connection refused");
    }
}
