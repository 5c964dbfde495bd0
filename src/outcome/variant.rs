use crate::outcome::core::Outcome;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Success variant of an [`Outcome`].
///
/// Only exposes the success payload. There is no error accessor on this type,
/// so asking a success for its error cannot be written once the variant has
/// been narrowed with [`Outcome::as_success`] or a `match`.
///
/// `T` is expected to be a plain payload. `Success<Success<_>>` is not
/// supported: the smart constructors only flatten when the payload type is
/// not itself a variant.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Outcome, Success};
///
/// let outcome: Outcome<i32, &str> = Outcome::ok(42);
/// if let Outcome::Ok(success) = &outcome {
///     assert_eq!(success.value(), &42);
/// }
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Success<T> {
    value: T,
}

impl<T> Success<T> {
    /// Wraps `value` as a success payload.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self { value }
    }

    /// Borrows the success payload.
    #[must_use]
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consumes the variant and returns the success payload.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Maps the payload, keeping the variant.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Success<U>
    where
        F: FnOnce(T) -> U,
    {
        Success::new(f(self.value))
    }
}

impl<T> From<T> for Success<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

/// Failure variant of an [`Outcome`].
///
/// Only exposes the failure payload, symmetric to [`Success`]. Likewise, `E`
/// is expected to be a plain payload rather than a `Failure<_>`.
///
/// # Examples
///
/// ```
/// use outcome_rail::{Failure, Outcome};
///
/// let outcome: Outcome<i32, &str> = Outcome::err("denied");
/// let failure: &Failure<&str> = outcome.as_failure().unwrap();
/// assert_eq!(failure.error(), &"denied");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub struct Failure<E> {
    error: E,
}

impl<E> Failure<E> {
    /// Wraps `error` as a failure payload.
    #[inline]
    pub const fn new(error: E) -> Self {
        Self { error }
    }

    /// Borrows the failure payload.
    #[must_use]
    #[inline]
    pub const fn error(&self) -> &E {
        &self.error
    }

    /// Consumes the variant and returns the failure payload.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> E {
        self.error
    }

    /// Maps the payload, keeping the variant.
    #[inline]
    pub fn map<G, F>(self, f: F) -> Failure<G>
    where
        F: FnOnce(E) -> G,
    {
        Failure::new(f(self.error))
    }
}

impl<E> From<E> for Failure<E> {
    #[inline]
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

/// Builds a successful [`Outcome`].
///
/// Accepts either a bare payload or an existing [`Success`]. A `Success` is
/// unwrapped one level and re-wrapped, so `ok(Success::new(x))` equals
/// `ok(x)` and the result is never doubly wrapped.
///
/// Flattening needs `T` to be the payload type, fixed by an annotation or by
/// inference from a bare payload. When only a `Success` is passed and nothing
/// pins `T`, the call is ambiguous and needs a type annotation. Choosing
/// `T = Success<_>` is not supported.
///
/// # Examples
///
/// ```
/// use outcome_rail::{ok, Outcome, Success};
///
/// let plain: Outcome<i32, &str> = ok(1);
/// let nested: Outcome<i32, &str> = ok(Success::new(1));
/// assert_eq!(plain, nested);
/// ```
#[inline]
pub fn ok<T, E>(value: impl Into<Success<T>>) -> Outcome<T, E> {
    Outcome::Ok(value.into())
}

/// Builds a failed [`Outcome`].
///
/// Symmetric to [`ok`]: an existing [`Failure`] is re-wrapped instead of nested.
/// `E` must be the payload type; `E = Failure<_>` is not supported.
///
/// # Examples
///
/// ```
/// use outcome_rail::{err, Failure, Outcome};
///
/// let plain: Outcome<i32, &str> = err("bad");
/// let nested: Outcome<i32, &str> = err(Failure::new("bad"));
/// assert_eq!(plain, nested);
/// ```
#[inline]
pub fn err<T, E>(error: impl Into<Failure<E>>) -> Outcome<T, E> {
    Outcome::Err(error.into())
}
