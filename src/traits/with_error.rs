use crate::outcome::Outcome;

/// Abstraction over types that carry an error variant which can be remapped.
///
/// Lets generic code rewrite the failure payload of either an [`Outcome`] or a
/// plain `Result` without knowing which container it holds.
///
/// # Type Parameters
///
/// * `E` - The current error type contained in the implementor
///
/// # Associated Types
///
/// * `Success` - The success value type when no error is present
/// * `ErrorOutput<G>` - The output type after mapping the error to type `G`
///
/// # Examples
///
/// ```
/// use outcome_rail::traits::WithError;
/// use outcome_rail::Outcome;
///
/// let outcome = Outcome::<i32, u16>::err(404);
/// let mapped = outcome.fmap_error(|code| format!("HTTP {code}"));
/// assert_eq!(mapped.into_error(), "HTTP 404");
/// ```
pub trait WithError<E> {
    type Success;

    type ErrorOutput<G>;

    /// Maps the error value using `f`, producing a new container with error type `G`.
    ///
    /// This operation leaves the success case untouched and only transforms the error.
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G;

    /// Converts the container into a `Result`.
    ///
    /// For types that are already `Result`, this is a no-op.
    fn to_result(self) -> Result<Self::Success, E>;
}

impl<T, E> WithError<E> for Outcome<T, E> {
    type Success = T;
    type ErrorOutput<G> = Outcome<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        Outcome::to_result(self)
    }
}

impl<T, E> WithError<E> for Result<T, E> {
    type Success = T;
    type ErrorOutput<G> = Result<T, G>;

    #[inline]
    fn fmap_error<F, G>(self, f: F) -> Self::ErrorOutput<G>
    where
        F: FnOnce(E) -> G,
    {
        self.map_err(f)
    }

    #[inline]
    fn to_result(self) -> Result<Self::Success, E> {
        self
    }
}
