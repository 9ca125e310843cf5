use std::time::Duration;

use attest_error::{CapabilityError, ErrorCategory};
use thiserror::Error;

/// Errors from chat and embedding backends.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("rate limited by provider")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication rejected: {0}")]
    Auth(String),

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

impl CapabilityError for LlmError {
    fn category(&self) -> ErrorCategory {
        match self {
            LlmError::Timeout(_) => ErrorCategory::Timeout,
            LlmError::RateLimited { .. } => ErrorCategory::RateLimit,
            LlmError::Auth(_) => ErrorCategory::Auth,
            LlmError::InvalidRequest(_) => ErrorCategory::InvalidInput,
            LlmError::ModelNotFound(_) => ErrorCategory::NotFound,
            LlmError::Unavailable(_) => ErrorCategory::Unavailable,
            LlmError::Backend(_) => ErrorCategory::Internal,
        }
    }

    fn retry_after(&self) -> Option<Duration> {
        match self {
            LlmError::RateLimited { retry_after } => *retry_after,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_maps_to_one_category() {
        let cases: Vec<(LlmError, ErrorCategory)> = vec![
            (
                LlmError::Timeout(Duration::from_secs(30)),
                ErrorCategory::Timeout,
            ),
            (
                LlmError::RateLimited { retry_after: None },
                ErrorCategory::RateLimit,
            ),
            (LlmError::Auth("bad key".into()), ErrorCategory::Auth),
            (
                LlmError::InvalidRequest("empty".into()),
                ErrorCategory::InvalidInput,
            ),
            (
                LlmError::ModelNotFound("tiny".into()),
                ErrorCategory::NotFound,
            ),
            (
                LlmError::Unavailable("draining".into()),
                ErrorCategory::Unavailable,
            ),
            (LlmError::Backend("oom".into()), ErrorCategory::Internal),
        ];
        for (err, expected) in cases {
            assert_eq!(err.category(), expected, "{err}");
        }
    }

    #[test]
    fn rate_limit_carries_suggested_delay() {
        let err = LlmError::RateLimited {
            retry_after: Some(Duration::from_secs(2)),
        };
        assert!(err.is_transient());
        assert!(err.is_retryable());
        assert_eq!(err.retry_after(), Some(Duration::from_secs(2)));
    }
}
