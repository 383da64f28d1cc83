//! Error type definitions for self-test operations

#[cfg(feature = "std")]
use std::string::String;

/// Primary error type for self-test operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The provider could not allocate or locate the requested backend
    CapabilityUnavailable {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Computed output differs from the known answer
    SelfTestFailed {
        context: &'static str,
    },

    /// Module integrity tag does not match the build-time expected tag
    IntegrityMismatch {
        context: &'static str,
    },

    /// Invalid key error
    InvalidKey {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Invalid length error with context
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    InvalidParameter {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Random generation error
    RandomGenerationError {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },

    /// Other error
    Other {
        context: &'static str,
        #[cfg(feature = "std")]
        message: String,
    },
}

/// Result type for self-test operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for a `CapabilityUnavailable` error without a message
    pub fn unavailable(context: &'static str) -> Self {
        Self::CapabilityUnavailable {
            context,
            #[cfg(feature = "std")]
            message: String::new(),
        }
    }

    /// Shorthand for a `SelfTestFailed` error
    pub fn self_test(context: &'static str) -> Self {
        Self::SelfTestFailed { context }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            #[cfg(feature = "std")]
            Self::CapabilityUnavailable { context, message } if !message.is_empty() => {
                write!(f, "capability unavailable: {}: {}", context, message)
            }
            Self::CapabilityUnavailable { context, .. } => {
                write!(f, "capability unavailable: {}", context)
            }
            Self::SelfTestFailed { context } => {
                write!(f, "self-test failed: {}", context)
            }
            Self::IntegrityMismatch { context } => {
                write!(f, "integrity mismatch: {}", context)
            }
            Self::InvalidKey { context, .. } => {
                write!(f, "invalid key: {}", context)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{}: invalid length (expected {}, got {})",
                    context, expected, actual
                )
            }
            #[cfg(feature = "std")]
            Self::InvalidParameter { context, message } if !message.is_empty() => {
                write!(f, "{}: {}", context, message)
            }
            Self::InvalidParameter { context, .. } => {
                write!(f, "invalid parameter: {}", context)
            }
            #[cfg(feature = "std")]
            Self::RandomGenerationError { context, message } if !message.is_empty() => {
                write!(f, "random generation failed: {}: {}", context, message)
            }
            Self::RandomGenerationError { context, .. } => {
                write!(f, "random generation failed: {}", context)
            }
            #[cfg(feature = "std")]
            Self::Other { context, message } if !message.is_empty() => {
                write!(f, "{}: {}", context, message)
            }
            Self::Other { context, .. } => {
                write!(f, "{}", context)
            }
        }
    }
}
