//! Misuse faults raised by wrong-variant access.
//!
//! Domain failures travel inside [`Failure`](crate::Failure) and are never
//! interpreted by this crate. The only error the crate itself produces is a
//! [`VariantError`], signalling that a consumer asked an [`Outcome`](crate::Outcome)
//! for the payload of the variant it does not hold.
//!
//! # Examples
//!
//! ```
//! use outcome_rail::{ok, Outcome, VariantError};
//!
//! let outcome: Outcome<i32, &str> = ok(7);
//! assert_eq!(outcome.try_error(), Err(VariantError::OkHasNoError));
//! assert_eq!(VariantError::OkHasNoError.to_string(), "Ok has no error");
//! ```
use core::fmt::{self, Display};

/// Wrong-variant access on an [`Outcome`](crate::Outcome).
///
/// The panicking accessors ([`Outcome::value`](crate::Outcome::value),
/// [`Outcome::error`](crate::Outcome::error) and their owning forms) use the
/// `Display` rendering of this type as their panic message.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum VariantError {
    /// The failure payload was requested from a success.
    OkHasNoError,
    /// The success payload was requested from a failure.
    ErrHasNoValue,
}

impl VariantError {
    /// Returns the fixed message for this fault.
    #[must_use]
    #[inline]
    pub const fn message(self) -> &'static str {
        match self {
            Self::OkHasNoError => "Ok has no error",
            Self::ErrHasNoValue => "Err has no value",
        }
    }
}

impl Display for VariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for VariantError {}
