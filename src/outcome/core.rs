use crate::error::VariantError;
use crate::outcome::variant::{Failure, Success};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Either a success payload or a failure payload, never both and never neither.
///
/// `Outcome<T, E>` is a closed sum type: `Ok` carries a [`Success<T>`] and
/// `Err` carries a [`Failure<E>`]. The variant is fixed at construction.
/// Consumers branch on the variant (with `match`, [`fold`](Outcome::fold),
/// [`as_success`](Outcome::as_success) or the boolean predicates) and then
/// read the payload of that variant.
///
/// # Serde Support
///
/// With the `serde` feature, `Outcome` serializes as an externally tagged
/// enum: `{"Ok": value}` or `{"Err": error}`.
///
/// # Type Parameters
///
/// * `T` - The success value type
/// * `E` - The failure value type
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, &str>::ok(42);
/// assert!(outcome.is_ok());
/// assert_eq!(outcome.into_value(), 42);
///
/// let outcome = Outcome::<i32, &str>::err("boom");
/// assert!(outcome.is_err());
/// assert_eq!(outcome.into_error(), "boom");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<T, E> {
    /// A success carrying the payload of type `T`.
    Ok(Success<T>),
    /// A failure carrying the payload of type `E`.
    Err(Failure<E>),
}

impl<T, E> Outcome<T, E> {
    /// Creates a success, re-wrapping an existing [`Success`] instead of nesting it.
    ///
    /// Flattening relies on `T` being the payload type. Leave `T` to be
    /// inferred from a bare payload or pin it explicitly; a `T` that is itself
    /// a `Success<_>` is not supported and would nest.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, Success};
    ///
    /// let flat = Outcome::<i32, &str>::ok(Success::new(5));
    /// assert_eq!(flat.value(), &5);
    /// ```
    #[inline]
    pub fn ok(value: impl Into<Success<T>>) -> Self {
        Self::Ok(value.into())
    }

    /// Creates a failure, re-wrapping an existing [`Failure`] instead of nesting it.
    ///
    /// As with [`ok`](Outcome::ok), `E` must be the payload type; an `E` that
    /// is itself a `Failure<_>` is not supported.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Failure, Outcome};
    ///
    /// let flat = Outcome::<i32, &str>::err(Failure::new("bad"));
    /// assert_eq!(flat.error(), &"bad");
    /// ```
    #[inline]
    pub fn err(error: impl Into<Failure<E>>) -> Self {
        Self::Err(error.into())
    }

    /// Returns `true` if the outcome is a success.
    #[must_use]
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }

    /// Returns `true` if the outcome is a failure. Always `!self.is_ok()`.
    #[must_use]
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Narrows to the success variant, if this is one.
    #[must_use]
    #[inline]
    pub const fn as_success(&self) -> Option<&Success<T>> {
        match self {
            Self::Ok(success) => Some(success),
            Self::Err(_) => None,
        }
    }

    /// Narrows to the failure variant, if this is one.
    #[must_use]
    #[inline]
    pub const fn as_failure(&self) -> Option<&Failure<E>> {
        match self {
            Self::Ok(_) => None,
            Self::Err(failure) => Some(failure),
        }
    }

    /// Consumes the outcome by calling exactly one of the two branches.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::err("nope");
    /// let text = outcome.fold(|v| format!("value {v}"), |e| format!("error {e}"));
    /// assert_eq!(text, "error nope");
    /// ```
    #[inline]
    pub fn fold<R, F, G>(self, on_ok: F, on_err: G) -> R
    where
        F: FnOnce(T) -> R,
        G: FnOnce(E) -> R,
    {
        match self {
            Self::Ok(success) => on_ok(success.into_value()),
            Self::Err(failure) => on_err(failure.into_error()),
        }
    }

    /// Borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `Err has no value` if the outcome is a failure. Check
    /// [`is_ok`](Outcome::is_ok) first, or use [`try_value`](Outcome::try_value).
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<&str, ()>::ok("admin");
    /// assert_eq!(outcome.value(), &"admin");
    /// ```
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::err("bad");
    /// let _ = outcome.value();
    /// ```
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn value(&self) -> &T {
        match self {
            Self::Ok(success) => success.value(),
            Self::Err(_) => variant_fault(VariantError::ErrHasNoValue),
        }
    }

    /// Borrows the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `Ok has no error` if the outcome is a success.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use outcome_rail::Outcome;
    ///
    /// let outcome = Outcome::<i32, &str>::ok(1);
    /// let _ = outcome.error();
    /// ```
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn error(&self) -> &E {
        match self {
            Self::Ok(_) => variant_fault(VariantError::OkHasNoError),
            Self::Err(failure) => failure.error(),
        }
    }

    /// Consumes the outcome and returns the success payload.
    ///
    /// # Panics
    ///
    /// Panics with `Err has no value` if the outcome is a failure.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn into_value(self) -> T {
        match self {
            Self::Ok(success) => success.into_value(),
            Self::Err(_) => variant_fault(VariantError::ErrHasNoValue),
        }
    }

    /// Consumes the outcome and returns the failure payload.
    ///
    /// # Panics
    ///
    /// Panics with `Ok has no error` if the outcome is a success.
    #[must_use]
    #[track_caller]
    #[inline]
    pub fn into_error(self) -> E {
        match self {
            Self::Ok(_) => variant_fault(VariantError::OkHasNoError),
            Self::Err(failure) => failure.into_error(),
        }
    }

    /// Returns the success payload, or the misuse fault as a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::{Outcome, VariantError};
    ///
    /// let outcome = Outcome::<i32, &str>::err("bad");
    /// assert_eq!(outcome.try_value(), Err(VariantError::ErrHasNoValue));
    /// ```
    #[inline]
    pub fn try_value(self) -> Result<T, VariantError> {
        match self {
            Self::Ok(success) => Ok(success.into_value()),
            Self::Err(_) => Err(VariantError::ErrHasNoValue),
        }
    }

    /// Returns the failure payload, or the misuse fault as a value.
    #[inline]
    pub fn try_error(self) -> Result<E, VariantError> {
        match self {
            Self::Ok(_) => Err(VariantError::OkHasNoError),
            Self::Err(failure) => Ok(failure.into_error()),
        }
    }

    /// Extracts the success payload, if any.
    #[must_use]
    #[inline]
    pub fn ok_value(self) -> Option<T> {
        match self {
            Self::Ok(success) => Some(success.into_value()),
            Self::Err(_) => None,
        }
    }

    /// Extracts the failure payload, if any.
    #[must_use]
    #[inline]
    pub fn err_value(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(failure) => Some(failure.into_error()),
        }
    }

    /// Converts from `&Outcome<T, E>` to `Outcome<&T, &E>`.
    #[inline]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Self::Ok(success) => Outcome::Ok(Success::new(success.value())),
            Self::Err(failure) => Outcome::Err(Failure::new(failure.error())),
        }
    }

    /// Maps the success payload, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let doubled = Outcome::<i32, &str>::ok(21).map(|x| x * 2);
    /// assert_eq!(doubled.into_value(), 42);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(success) => Outcome::Ok(success.map(f)),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Maps the failure payload, leaving a success untouched.
    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Ok(success) => Outcome::Ok(success),
            Self::Err(failure) => Outcome::Err(failure.map(f)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// `f` only runs on a success; a failure is forwarded as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// fn parse_even(input: i32) -> Outcome<i32, &'static str> {
    ///     if input % 2 == 0 {
    ///         Outcome::ok(input)
    ///     } else {
    ///         Outcome::err("not even")
    ///     }
    /// }
    ///
    /// assert_eq!(Outcome::ok(4).and_then(parse_even).into_value(), 4);
    /// assert!(Outcome::ok(3).and_then(parse_even).is_err());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Ok(success) => f(success.into_value()),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }

    /// Calls `op` on a failure, otherwise returns the success unchanged.
    #[inline]
    pub fn or_else<G, F>(self, op: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> Outcome<T, G>,
    {
        match self {
            Self::Ok(success) => Outcome::Ok(success),
            Self::Err(failure) => op(failure.into_error()),
        }
    }

    /// Returns the success payload or `default`.
    #[must_use]
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(success) => success.into_value(),
            Self::Err(_) => default,
        }
    }

    /// Returns the success payload or computes one from the failure.
    #[must_use]
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(success) => success.into_value(),
            Self::Err(failure) => f(failure.into_error()),
        }
    }
}

impl<T, E> Outcome<Outcome<T, E>, E> {
    /// Collapses one level of nesting.
    ///
    /// # Examples
    ///
    /// ```
    /// use outcome_rail::Outcome;
    ///
    /// let nested = Outcome::<Outcome<i32, &str>, &str>::ok(Outcome::ok(3));
    /// assert_eq!(nested.flatten(), Outcome::ok(3));
    ///
    /// let nested = Outcome::<Outcome<i32, &str>, &str>::ok(Outcome::err("inner"));
    /// assert_eq!(nested.flatten(), Outcome::err("inner"));
    /// ```
    #[inline]
    pub fn flatten(self) -> Outcome<T, E> {
        match self {
            Self::Ok(inner) => inner.into_value(),
            Self::Err(failure) => Outcome::Err(failure),
        }
    }
}

impl<T, E> From<Success<T>> for Outcome<T, E> {
    #[inline]
    fn from(success: Success<T>) -> Self {
        Self::Ok(success)
    }
}

impl<T, E> From<Failure<E>> for Outcome<T, E> {
    #[inline]
    fn from(failure: Failure<E>) -> Self {
        Self::Err(failure)
    }
}

#[cold]
#[track_caller]
fn variant_fault(fault: VariantError) -> ! {
    panic!("{}", fault.message())
}
