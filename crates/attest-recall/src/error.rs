use std::time::Duration;

use attest_error::{CapabilityError, ErrorCategory};
use attest_types::EntryId;
use thiserror::Error;

/// Errors from recall backends.
#[derive(Debug, Error)]
pub enum RecallError {
    #[error("query timed out after {0:?}")]
    Timeout(Duration),

    #[error("entry not found: {0}")]
    EntryNotFound(EntryId),

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("write conflict on entry {0}")]
    WriteConflict(EntryId),

    #[error("index unavailable: {0}")]
    Unavailable(String),

    #[error("backend failure: {0}")]
    Backend(String),
}

impl CapabilityError for RecallError {
    fn category(&self) -> ErrorCategory {
        match self {
            RecallError::Timeout(_) => ErrorCategory::Timeout,
            RecallError::EntryNotFound(_) => ErrorCategory::NotFound,
            RecallError::InvalidQuery(_) => ErrorCategory::InvalidInput,
            RecallError::WriteConflict(_) => ErrorCategory::Conflict,
            RecallError::Unavailable(_) => ErrorCategory::Unavailable,
            RecallError::Backend(_) => ErrorCategory::Internal,
        }
    }
}
