//! Best-effort operation results
//!
//! Some lookups (category lists, health checks) degrade to a default instead
//! of failing. They return [`BestEffort`] rather than `Result` so the absorbed
//! failure is visible in the signature and still available for logging.

use std::fmt::Display;

/// A value that may be a fallback standing in for a failed operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct BestEffort<T> {
    value: T,
    degraded: Option<String>,
}

impl<T> BestEffort<T> {
    /// The operation succeeded
    pub const fn ok(value: T) -> Self {
        Self { value, degraded: None }
    }

    /// The operation failed; `value` is the fallback
    pub fn fallback(value: T, reason: impl Into<String>) -> Self {
        Self { value, degraded: Some(reason.into()) }
    }

    /// Absorb an error into `fallback`
    pub fn from_result_or<E: Display>(result: Result<T, E>, fallback: T) -> Self {
        match result {
            Ok(value) => Self::ok(value),
            Err(err) => Self::fallback(fallback, err.to_string()),
        }
    }

    /// Value or fallback
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Consume into the value or fallback
    pub fn into_inner(self) -> T {
        self.value
    }

    /// True when the fallback was used
    pub const fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }

    /// Why the fallback was used, if it was
    pub fn degraded_reason(&self) -> Option<&str> {
        self.degraded.as_deref()
    }
}

impl<T: Default> BestEffort<T> {
    /// Absorb an error into `T::default()`
    pub fn from_result<E: Display>(result: Result<T, E>) -> Self {
        Self::from_result_or(result, T::default())
    }
}
