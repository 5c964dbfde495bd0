//! Tracing integration for outcome-rail.
//!
//! Emits structured events for outcomes as they pass through, without
//! changing them. Aggregation through [`all`](crate::all) also reports the
//! position of the failure that stopped it at `debug` level.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::Debug;

use crate::outcome::Outcome;

/// Extension trait that logs an outcome and hands it back unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use outcome_rail::trace::OutcomeTraceExt;
///
/// let user = login(request).trace_err("login");
/// ```
pub trait OutcomeTraceExt<T, E>: Sized {
    /// Emits a `warn` event carrying `label` and the failure when this is an `Err`.
    fn trace_err(self, label: &str) -> Self;

    /// Emits a `debug` event carrying `label` when this is an `Ok`.
    fn trace_ok(self, label: &str) -> Self;
}

impl<T, E> OutcomeTraceExt<T, E> for Outcome<T, E>
where
    E: Debug,
{
    fn trace_err(self, label: &str) -> Self {
        if let Some(failure) = self.as_failure() {
            tracing::warn!(label, error = ?failure.error(), "outcome failed");
        }
        self
    }

    fn trace_ok(self, label: &str) -> Self {
        if self.is_ok() {
            tracing::debug!(label, "outcome succeeded");
        }
        self
    }
}
