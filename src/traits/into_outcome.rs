//! Extension trait for lifting std results into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::IntoOutcome;
//!
//! let outcome = "42".parse::<i32>().into_outcome();
//! assert_eq!(outcome.into_value(), 42);
//! ```

use crate::outcome::Outcome;

/// Converts a value carrying success/failure into an [`Outcome`].
pub trait IntoOutcome<T, E> {
    /// Performs the conversion, keeping both payloads as they are.
    fn into_outcome(self) -> Outcome<T, E>;
}

impl<T, E> IntoOutcome<T, E> for Result<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        Outcome::from_result(self)
    }
}

impl<T, E> IntoOutcome<T, E> for Outcome<T, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<T, E> {
        self
    }
}
