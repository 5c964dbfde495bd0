//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `outcome_rail::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Branching on the Variant
//!
//! ```
//! use outcome_rail::{ok, Outcome};
//!
//! let outcome: Outcome<&str, &str> = ok("admin");
//!
//! match &outcome {
//!     Outcome::Ok(success) => assert_eq!(success.value(), &"admin"),
//!     Outcome::Err(failure) => panic!("unexpected failure: {}", failure.error()),
//! }
//! ```
//!
//! ## Flattening
//!
//! ```
//! use outcome_rail::{ok, Outcome, Success};
//!
//! let forwarded = Success::new(3);
//! let outcome: Outcome<i32, &str> = ok(forwarded);
//! assert_eq!(outcome, ok(3));
//! ```
//!
//! ## Fail-Fast Aggregation
//!
//! ```
//! use outcome_rail::{all, err, ok, Outcome};
//!
//! let login: Outcome<&str, &str> = err("invalid credentials");
//! let checkpoint: Outcome<bool, &str> = ok(false);
//!
//! assert_eq!(all((login, checkpoint)).into_error(), "invalid credentials");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod alloc_type;

/// Error conversions between Outcome, Result and Option
pub mod convert;
/// Misuse faults raised by wrong-variant access
pub mod error;
/// The Outcome sum type, its variants and aggregation
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for interoperating with Result and generic error containers
pub mod traits;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod trace;

// Re-export the core algebra at root; conversions and traits stay reachable
// through their modules as well.
pub use convert::{option_to_outcome, outcome_to_result, result_to_outcome};
pub use error::VariantError;
pub use outcome::{all, all_iter, err, ok, All, Failure, Outcome, Success};
pub use traits::{IntoOutcome, WithError};
