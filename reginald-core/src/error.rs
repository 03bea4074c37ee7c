//! Error types for Reginald

use thiserror::Error;

/// The main error type for Reginald operations
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer positional arguments supplied than the operation requires
    #[error("'{operation}' takes at least {required} argument(s), {supplied} provided")]
    Arity {
        operation: &'static str,
        required: usize,
        supplied: usize,
    },

    /// A supplied argument has the wrong runtime type
    #[error("'{operation}' expected a {expected} argument, got {actual}")]
    Type {
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// Serialization error at the wire encoding boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience Result type for Reginald operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new arity error
    pub fn arity(operation: &'static str, required: usize, supplied: usize) -> Self {
        Self::Arity {
            operation,
            required,
            supplied,
        }
    }

    /// Create a new type error
    pub fn type_mismatch(
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::Type {
            operation,
            expected,
            actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_error() {
        let err = Error::arity("create_database", 1, 0);
        assert!(matches!(err, Error::Arity { .. }));
        assert_eq!(
            err.to_string(),
            "'create_database' takes at least 1 argument(s), 0 provided"
        );
    }

    #[test]
    fn test_type_error() {
        let err = Error::type_mismatch("create_database", "string", "number");
        assert!(matches!(err, Error::Type { .. }));
        assert_eq!(
            err.to_string(),
            "'create_database' expected a string argument, got number"
        );
    }
}
