//! Traits that connect [`Outcome`](crate::Outcome) to the rest of the ecosystem.
//!
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//! - [`IntoOutcome`]: Lifts a `Result` into an `Outcome`
//!
//! # Examples
//!
//! ```
//! use outcome_rail::traits::{IntoOutcome, WithError};
//!
//! let outcome = Err::<i32, &str>("missing").into_outcome();
//! let remapped = outcome.fmap_error(|e| e.len());
//! assert_eq!(remapped.into_error(), 7);
//! ```

pub mod into_outcome;
pub mod with_error;

pub use into_outcome::IntoOutcome;
pub use with_error::WithError;
