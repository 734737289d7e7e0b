//! Error type definitions for field operations

use alloc::string::String;

/// Primary error type for field and encoding operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        message: String,
    },

    /// An element without a multiplicative inverse was inverted
    NotInvertible {
        context: &'static str,
    },

    /// Malformed textual or binary encoding
    MalformedEncoding {
        context: &'static str,
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for field operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Add context to an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength { expected, actual, .. } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidParameter { message, .. } => Self::InvalidParameter { context, message },
            Self::NotInvertible { .. } => Self::NotInvertible { context },
            Self::MalformedEncoding { message, .. } => Self::MalformedEncoding { context, message },
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidLength { context, expected, actual } => {
                write!(f, "{}: invalid length (expected {}, got {})",
                    context, expected, actual)
            },
            Self::InvalidParameter { context, message } => {
                write!(f, "{}: {}", context, message)
            },
            Self::NotInvertible { context } => {
                write!(f, "{}: element has no multiplicative inverse", context)
            },
            Self::MalformedEncoding { context, message } => {
                write!(f, "Malformed encoding: {}: {}", context, message)
            },
            Self::Other { context, message } => {
                write!(f, "{}: {}", context, message)
            },
        }
    }
}
