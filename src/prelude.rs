//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use outcome_rail::prelude::*;
//!
//! fn find_user(id: u64) -> Outcome<&'static str, &'static str> {
//!     if id == 1 { ok("admin") } else { err("unknown user") }
//! }
//!
//! assert!(find_user(1).is_ok());
//! assert!(find_user(2).is_err());
//! ```

pub use crate::error::VariantError;
pub use crate::outcome::{all, all_iter, err, ok, Failure, Outcome, Success};
pub use crate::traits::{IntoOutcome, WithError};

#[cfg(feature = "tracing")]
pub use crate::trace::OutcomeTraceExt;
