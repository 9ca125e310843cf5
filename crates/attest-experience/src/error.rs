use std::time::Duration;

use attest_error::{CapabilityError, ErrorCategory};
use attest_types::SequenceNo;
use thiserror::Error;

/// Errors from experience log backends.
#[derive(Debug, Error)]
pub enum ExperienceError {
    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("sequence not found: {0}")]
    SequenceNotFound(SequenceNo),

    #[error("invalid replay range: from {from} to {to}")]
    InvalidRange { from: SequenceNo, to: SequenceNo },

    #[error("append rejected: log is sealed at {0}")]
    Sealed(SequenceNo),

    #[error("log unavailable: {0}")]
    Unavailable(String),

    #[error("append-only violation: {0}")]
    AppendOnlyViolation(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

impl CapabilityError for ExperienceError {
    fn category(&self) -> ErrorCategory {
        match self {
            ExperienceError::Timeout(_) => ErrorCategory::Timeout,
            ExperienceError::SequenceNotFound(_) => ErrorCategory::NotFound,
            ExperienceError::InvalidRange { .. } => ErrorCategory::InvalidInput,
            ExperienceError::Sealed(_) => ErrorCategory::Conflict,
            ExperienceError::Unavailable(_) => ErrorCategory::Unavailable,
            ExperienceError::AppendOnlyViolation(_) => ErrorCategory::InvariantViolation,
            ExperienceError::Backend(_) => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_only_violation_is_fatal() {
        let err = ExperienceError::AppendOnlyViolation("rewrite attempt".into());
        assert_eq!(err.category(), ErrorCategory::InvariantViolation);
        assert!(!err.is_retryable());
        assert!(!err.is_transient());
    }

    #[test]
    fn sealed_log_is_a_conflict() {
        let err = ExperienceError::Sealed(SequenceNo(10));
        assert!(err.is_retryable());
        assert!(!err.is_transient());
    }
}
