//! Conversion helpers between `Outcome`, `Result`, and `Option`.
//!
//! These adapters make it straightforward to adopt `outcome-rail` at the edges
//! of a codebase: wrap results coming from std or third-party APIs, and hand
//! plain `Result`s back to code that expects them (for example to use `?`).
//!
//! # Examples
//!
//! ```
//! use outcome_rail::convert::*;
//! use outcome_rail::Outcome;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_ok());
//!
//! let back: Result<i32, &str> = outcome_to_result(outcome);
//! assert_eq!(back, Ok(42));
//! ```

use crate::outcome::{Failure, Outcome, Success};

/// Converts a `Result` into an `Outcome` with the same payloads.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::result_to_outcome;
///
/// let outcome = result_to_outcome(Err::<i32, &str>("failed"));
/// assert!(outcome.is_err());
/// ```
#[inline]
pub fn result_to_outcome<T, E>(result: Result<T, E>) -> Outcome<T, E> {
    match result {
        Ok(value) => Outcome::Ok(Success::new(value)),
        Err(error) => Outcome::Err(Failure::new(error)),
    }
}

/// Converts an `Outcome` into a `Result` with the same payloads.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::outcome_to_result;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, &str>::err("failed");
/// assert_eq!(outcome_to_result(outcome), Err("failed"));
/// ```
#[inline]
pub fn outcome_to_result<T, E>(outcome: Outcome<T, E>) -> Result<T, E> {
    outcome.fold(Ok, Err)
}

/// Converts an `Option` into an `Outcome`, using `error` for `None`.
///
/// # Examples
///
/// ```
/// use outcome_rail::convert::option_to_outcome;
///
/// let missing = option_to_outcome(None::<i32>, "no user");
/// assert_eq!(missing.into_error(), "no user");
///
/// let present = option_to_outcome(Some(7), "no user");
/// assert_eq!(present.into_value(), 7);
/// ```
#[inline]
pub fn option_to_outcome<T, E>(option: Option<T>, error: E) -> Outcome<T, E> {
    match option {
        Some(value) => Outcome::Ok(Success::new(value)),
        None => Outcome::Err(Failure::new(error)),
    }
}

impl<T, E> Outcome<T, E> {
    /// Wraps a normal `Result`.
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }

    /// Converts into a `Result`, so the outcome can be propagated with `?`.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn double(input: Outcome<i32, &'static str>) -> Result<i32, &'static str> {
    ///     let value = input.to_result()?;
    ///     Ok(value * 2)
    /// }
    ///
    /// assert_eq!(double(Outcome::ok(21)), Ok(42));
    /// assert_eq!(double(Outcome::err("bad")), Err("bad"));
    /// ```
    #[inline]
    pub fn to_result(self) -> Result<T, E> {
        outcome_to_result(self)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        result_to_outcome(result)
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome_to_result(outcome)
    }
}
