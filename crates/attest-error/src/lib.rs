//! Error classification for capability backends.
//!
//! Every capability error type (chat, embed, recall, experience, validate,
//! promote) maps onto exactly one [`ErrorCategory`] and implements the
//! [`CapabilityError`] contract. Generic retry and circuit-breaker logic
//! runs against this contract alone, without knowing which capability
//! failed.
//!
//! Two orthogonal flags drive retry policy:
//!
//! - `is_transient` — the condition may clear without the caller changing
//!   anything (a timeout, a rate limit window, a backend restart).
//! - `is_retryable` — retrying is sensible at all, given idempotency. An
//!   optimistic-locking conflict is retryable but NOT transient: the caller
//!   must re-read and change something first.
//!
//! `InvariantViolation` is neither transient nor retryable and must never
//! be silently retried.

#![deny(unsafe_code)]

pub mod category;
pub mod class;

pub use category::ErrorCategory;
pub use class::ErrorClass;

use std::time::Duration;

/// The shared classification contract implemented by every
/// capability-specific error type.
///
/// Default flag implementations derive from the category table; error types
/// override them only when a specific variant knows better (e.g. a
/// rate-limit error carrying a server-suggested delay).
pub trait CapabilityError: std::error::Error + Send + Sync + 'static {
    /// The single closed category this error maps onto.
    fn category(&self) -> ErrorCategory;

    /// May the condition clear without the caller changing anything?
    fn is_transient(&self) -> bool {
        self.category().default_transient()
    }

    /// Is retrying sensible at all, given idempotency?
    fn is_retryable(&self) -> bool {
        self.category().default_retryable()
    }

    /// Server- or policy-suggested delay before the next attempt.
    fn retry_after(&self) -> Option<Duration> {
        None
    }

    /// Snapshot the classification for structured logging or audit records.
    fn classify(&self) -> ErrorClass {
        ErrorClass {
            category: self.category(),
            is_retryable: self.is_retryable(),
            is_transient: self.is_transient(),
            retry_after_ms: self.retry_after().map(|d| d.as_millis() as u64),
        }
    }
}
