//! Fail-fast aggregation of many outcomes into one.
//!
//! [`all`] merges a tuple, array or vector of outcomes: the first failure, scanning
//! left to right, is returned unchanged and nothing after it is inspected.
//! If every element succeeds, the payloads are returned in input order.
//!
//! Tuples may mix success types (up to twelve elements), which is how two
//! unrelated operations are combined:
//!
//! ```
//! use outcome_rail::{all, Outcome};
//!
//! let name = Outcome::<&str, &str>::ok("admin");
//! let attempts = Outcome::<u32, &str>::ok(3);
//!
//! let (name, attempts) = all((name, attempts)).into_value();
//! assert_eq!(name, "admin");
//! assert_eq!(attempts, 3);
//! ```
use crate::alloc_type::Vec;
use crate::outcome::core::Outcome;
use crate::outcome::variant::{Failure, Success};

/// Collections of outcomes that can be merged with [`all`].
pub trait All {
    /// The merged outcome: success holds every payload in order.
    type Output;

    /// Merges the collection, stopping at the first failure.
    fn all(self) -> Self::Output;
}

/// Merges a collection of outcomes, returning the first failure verbatim.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all, Outcome};
///
/// let merged = all(vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2), Outcome::ok(3)]);
/// assert_eq!(merged.into_value(), vec![1, 2, 3]);
///
/// let merged = all(vec![Outcome::<i32, &str>::ok(1), Outcome::err("bad"), Outcome::ok(3)]);
/// assert_eq!(merged.into_error(), "bad");
///
/// let merged = all(Vec::<Outcome<i32, &str>>::new());
/// assert!(merged.into_value().is_empty());
///
/// let merged = all([Outcome::<i32, &str>::ok(1), Outcome::ok(2)]);
/// assert_eq!(merged.into_value(), vec![1, 2]);
/// ```
#[inline]
pub fn all<A>(results: A) -> A::Output
where
    A: All,
{
    results.all()
}

/// Merges outcomes pulled lazily from an iterator.
///
/// Elements after the first failure are never pulled, so work done by a
/// lazy iterator (such as a `map` closure) does not run for them.
///
/// # Examples
///
/// ```
/// use outcome_rail::{all_iter, Outcome};
///
/// let mut pulled = 0;
/// let merged = all_iter([1, -2, 3].into_iter().map(|n| {
///     pulled += 1;
///     if n > 0 { Outcome::<i32, &str>::ok(n) } else { Outcome::err("negative") }
/// }));
///
/// assert_eq!(merged, Outcome::err("negative"));
/// assert_eq!(pulled, 2);
/// ```
#[inline]
pub fn all_iter<T, E, I>(results: I) -> Outcome<Vec<T>, E>
where
    I: IntoIterator<Item = Outcome<T, E>>,
{
    results.into_iter().collect()
}

impl<T, E> All for Vec<Outcome<T, E>> {
    type Output = Outcome<Vec<T>, E>;

    #[inline]
    fn all(self) -> Self::Output {
        all_iter(self)
    }
}

impl<T, E, const N: usize> All for [Outcome<T, E>; N] {
    type Output = Outcome<Vec<T>, E>;

    #[inline]
    fn all(self) -> Self::Output {
        all_iter(self)
    }
}

/// Collects success payloads into any collection, stopping at the first failure.
///
/// # Examples
///
/// ```
/// use outcome_rail::Outcome;
///
/// let inputs = vec![Outcome::<i32, &str>::ok(1), Outcome::ok(2)];
/// let collected: Outcome<Vec<i32>, &str> = inputs.into_iter().collect();
/// assert_eq!(collected.into_value(), vec![1, 2]);
/// ```
impl<T, E, C> FromIterator<Outcome<T, E>> for Outcome<C, E>
where
    C: FromIterator<T>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Outcome<T, E>>,
    {
        let mut failure = None;
        let values: C = UntilFailure { iter: iter.into_iter(), position: 0, failure: &mut failure }
            .collect();

        match failure {
            Some(failure) => Outcome::Err(failure),
            None => Outcome::Ok(Success::new(values)),
        }
    }
}

/// Yields success payloads until the first failure, which it parks in `failure`.
struct UntilFailure<'a, I, E> {
    iter: I,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    position: usize,
    failure: &'a mut Option<Failure<E>>,
}

impl<I, T, E> Iterator for UntilFailure<'_, I, E>
where
    I: Iterator<Item = Outcome<T, E>>,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failure.is_some() {
            return None;
        }

        match self.iter.next()? {
            Outcome::Ok(success) => {
                self.position += 1;
                Some(success.into_value())
            },
            Outcome::Err(failure) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(position = self.position, "aggregation stopped at first failure");
                *self.failure = Some(failure);
                None
            },
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failure.is_some() {
            (0, Some(0))
        } else {
            (0, self.iter.size_hint().1)
        }
    }
}

macro_rules! impl_all_for_tuple {
    ($($position:literal $slot:ident : $ty:ident),+) => {
        impl<E, $($ty),+> All for ($(Outcome<$ty, E>,)+) {
            type Output = Outcome<($($ty,)+), E>;

            fn all(self) -> Self::Output {
                let ($($slot,)+) = self;
                $(
                    let $slot = match $slot {
                        Outcome::Ok(success) => success.into_value(),
                        Outcome::Err(failure) => {
                            #[cfg(feature = "tracing")]
                            tracing::debug!(position = $position, "aggregation stopped at first failure");
                            return Outcome::Err(failure);
                        },
                    };
                )+
                Outcome::Ok(Success::new(($($slot,)+)))
            }
        }
    };
}

impl_all_for_tuple!(0 a: A);
impl_all_for_tuple!(0 a: A, 1 b: B);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H, 7 i: I);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H, 7 i: I, 8 j: J);
impl_all_for_tuple!(0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H, 7 i: I, 8 j: J, 9 k: K);
impl_all_for_tuple!(
    0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H, 7 i: I, 8 j: J, 9 k: K, 10 l: L
);
impl_all_for_tuple!(
    0 a: A, 1 b: B, 2 c: C, 3 d: D, 4 f: F, 5 g: G, 6 h: H, 7 i: I, 8 j: J, 9 k: K, 10 l: L,
    11 m: M
);
