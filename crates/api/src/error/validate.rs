//! Validation helpers shared by engine implementations and the runner

use super::types::{Error, Result};

/// Checks that a buffer has exactly the expected length
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Checks that a buffer does not exceed a maximum length
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::InvalidLength {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Checks an arbitrary parameter condition
pub fn parameter(condition: bool, context: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter {
            context,
            #[cfg(feature = "std")]
            message: std::string::String::new(),
        });
    }
    Ok(())
}
