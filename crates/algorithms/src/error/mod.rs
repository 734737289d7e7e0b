//! Error handling for field arithmetic

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::ToString;
use core::fmt;

use gf359_api::Error as CoreError;

/// The error type for field arithmetic and encodings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Parameter validation error
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },

    /// Length validation error
    Length {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// The zero element was inverted (or used as a divisor)
    InverseOfZero {
        /// Operation that attempted the inversion
        context: &'static str,
    },

    /// Textual input contained something other than a hex digit, or a bare
    /// `0x` prefix.
    ///
    /// Malformed hex is always rejected; it is never truncated or read as zero.
    MalformedInput {
        /// Decoder that rejected the input
        context: &'static str,
        /// Byte offset of the offending character in the original input
        position: usize,
        /// The offending character, `None` when a `0x` prefix had no digits after it
        found: Option<char>,
    },

    /// Processing error during a field operation
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: &'static str,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for field operations
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Parameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            },
            Error::Length { context, expected, actual } => {
                write!(f, "Invalid length for {}: expected {}, got {}",
                    context, expected, actual)
            },
            Error::InverseOfZero { context } => {
                write!(f, "Inverse of zero in {}", context)
            },
            Error::MalformedInput { context, position, found: Some(c) } => {
                write!(f, "Malformed input for {}: unexpected {:?} at offset {}",
                    context, c, position)
            },
            Error::MalformedInput { context, found: None, .. } => {
                write!(f, "Malformed input for {}: no digits after prefix", context)
            },
            Error::Processing { operation, details } => {
                write!(f, "Processing error in {}: {}", operation, details)
            },
        }
    }
}

// Implement std::error::Error when std is available
#[cfg(feature = "std")]
impl std::error::Error for Error {}

// Implement conversion to CoreError
impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Parameter { name, reason } => CoreError::InvalidParameter {
                context: "field parameter",
                message: format!("{}: {}", name, reason),
            },
            Error::Length { context, expected, actual } => CoreError::InvalidLength {
                context,
                expected,
                actual,
            },
            Error::InverseOfZero { context } => CoreError::NotInvertible { context },
            Error::MalformedInput { context, .. } => CoreError::MalformedEncoding {
                context,
                message: err.to_string(),
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details.to_string(),
            },
        }
    }
}

// Include the validation submodule
pub mod validate;
