//! Argument validation for the `square` callable

use crate::error::{ArgumentError, Result};
use crate::SQUARE_ARITY;

/// Check the positional argument count of a `square` call.
///
/// Runs before any conversion, so a call with the wrong count reports
/// [`ArgumentError::Arity`] even when its arguments are not numbers.
pub fn check_arity(given: usize) -> Result<()> {
    if given == SQUARE_ARITY {
        Ok(())
    } else {
        Err(ArgumentError::Arity {
            expected: SQUARE_ARITY,
            given,
        })
    }
}
