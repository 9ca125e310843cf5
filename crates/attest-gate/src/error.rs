use attest_error::{CapabilityError, ErrorCategory};
use attest_types::{FactId, PolicyId, ProposalId};
use thiserror::Error;

/// Errors from a validator run.
#[derive(Debug, Error)]
pub enum ValidatorError {
    #[error("policy {policy} has no checks")]
    EmptyPolicy { policy: PolicyId },

    #[error("{failed} of {total} required checks failed for proposal {proposal_id}: {first_failure}")]
    ChecksFailed {
        proposal_id: ProposalId,
        failed: usize,
        total: usize,
        first_failure: String,
    },

    #[error("validation dependency unavailable: {0}")]
    DependencyUnavailable(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CapabilityError for ValidatorError {
    fn category(&self) -> ErrorCategory {
        match self {
            ValidatorError::EmptyPolicy { .. } => ErrorCategory::InvalidInput,
            ValidatorError::ChecksFailed { .. } => ErrorCategory::InvariantViolation,
            ValidatorError::DependencyUnavailable(_) => ErrorCategory::Unavailable,
            ValidatorError::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

/// Errors from the promotion boundary.
#[derive(Debug, Error)]
pub enum PromoterError {
    #[error("report is bound to proposal {report_bound}, not {presented}")]
    ReportProposalMismatch {
        presented: ProposalId,
        report_bound: ProposalId,
    },

    #[error("content hash mismatch for proposal {proposal_id}: report no longer matches content")]
    ContentHashMismatch { proposal_id: ProposalId },

    #[error("proposal {0} was already promoted; its report is consumed")]
    AlreadyPromoted(ProposalId),

    #[error("correction target not found: {0}")]
    OriginalFactNotFound(FactId),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl CapabilityError for PromoterError {
    fn category(&self) -> ErrorCategory {
        match self {
            PromoterError::ReportProposalMismatch { .. }
            | PromoterError::ContentHashMismatch { .. }
            | PromoterError::AlreadyPromoted(_) => ErrorCategory::InvariantViolation,
            PromoterError::OriginalFactNotFound(_) => ErrorCategory::NotFound,
            PromoterError::Ledger(err) => err.category(),
            PromoterError::Serialization(_) => ErrorCategory::Internal,
        }
    }
}

/// Errors from the fact ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("duplicate fact id: {0}")]
    DuplicateFact(FactId),

    #[error("ledger lock poisoned")]
    Poisoned,
}

impl CapabilityError for LedgerError {
    fn category(&self) -> ErrorCategory {
        match self {
            LedgerError::DuplicateFact(_) => ErrorCategory::InvariantViolation,
            LedgerError::Poisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_violations_are_never_retryable() {
        let err = PromoterError::AlreadyPromoted(ProposalId::new());
        assert_eq!(err.category(), ErrorCategory::InvariantViolation);
        assert!(!err.is_retryable());
        assert!(!err.is_transient());
    }

    #[test]
    fn failed_checks_classify_as_invariant_violation() {
        let err = ValidatorError::ChecksFailed {
            proposal_id: ProposalId::new(),
            failed: 1,
            total: 3,
            first_failure: "content_not_empty".into(),
        };
        assert_eq!(err.category(), ErrorCategory::InvariantViolation);
    }

    #[test]
    fn unreachable_dependency_is_transient() {
        let err = ValidatorError::DependencyUnavailable("recall index".into());
        assert_eq!(err.category(), ErrorCategory::Unavailable);
        assert!(err.is_transient());
    }
}
