//! Error types for sqlforge.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// NUL byte (or other disallowed character) in an identifier.
    #[error("invalid identifier {identifier:?}: {reason}")]
    InvalidIdentifier { identifier: String, reason: String },

    /// NUL byte in a string value.
    #[error("invalid string value: {0}")]
    InvalidString(String),

    /// A host value has no SQL representation (e.g. a function, a raw
    /// binary blob when no encoder is configured).
    #[error("unsupported value: {0}")]
    UnsupportedValue(String),

    /// `substitute` was given fewer values than placeholders reference.
    #[error("missing bind value for placeholder #{index} (only {supplied} supplied)")]
    MissingBind { index: usize, supplied: usize },

    /// `substitute` hit an unterminated string/identifier literal.
    #[error("unterminated literal starting at byte {position} in template")]
    LexError { position: usize },

    /// The builder was asked to compile into an invalid shape.
    #[error("invalid query shape: {0}")]
    QueryShape(String),
}

impl Error {
    pub fn invalid_identifier(identifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            reason: reason.into(),
        }
    }

    pub fn query_shape(message: impl Into<String>) -> Self {
        Self::QueryShape(message.into())
    }
}

/// Result type alias for sqlforge operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_identifier_display() {
        let err = Error::invalid_identifier("a\0b", "contains NUL byte");
        assert_eq!(
            err.to_string(),
            "invalid identifier \"a\\0b\": contains NUL byte"
        );
    }

    #[test]
    fn missing_bind_display() {
        let err = Error::MissingBind {
            index: 2,
            supplied: 1,
        };
        assert_eq!(
            err.to_string(),
            "missing bind value for placeholder #2 (only 1 supplied)"
        );
    }
}
