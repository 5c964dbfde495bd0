//! The `Outcome` algebra: a success/failure sum type and its combinators.
//!
//! # Key Components
//!
//! - [`Outcome`] - Either a [`Success`] or a [`Failure`]
//! - [`ok`] / [`err`] - Smart constructors that never nest a variant inside itself
//! - [`all`] / [`all_iter`] - Fail-fast, order-preserving aggregation
//!
//! # Examples
//!
//! ```
//! use outcome_rail::outcome::{all, err, ok, Outcome};
//!
//! let first: Outcome<i32, &str> = ok(1);
//! let second: Outcome<&str, &str> = err("bad");
//!
//! let merged = all((first, second));
//! assert!(merged.is_err());
//! assert_eq!(merged.into_error(), "bad");
//! ```
pub mod all;
pub mod core;
pub mod iter;
pub mod variant;

pub use self::all::{all, all_iter, All};
pub use self::core::*;
pub use self::iter::*;
pub use self::variant::*;
