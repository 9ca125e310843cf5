use std::sync::Arc;

use async_trait::async_trait;
use attest_types::{canonical_json_bytes, Clock, ContentHash, ContentHasher, ReportId};
use tracing::{debug, info, warn};

use crate::error::ValidatorError;
use crate::policy::ValidationPolicy;
use crate::proposal::{Draft, Proposal, ProposalContent, Validated};
use crate::report::{CheckResult, ProofToken, ValidationReport};

/// Hash a proposal's content over its canonical JSON, so the bound hash
/// never depends on field order.
pub(crate) fn content_hash_of(
    hasher: &dyn ContentHasher,
    content: &ProposalContent,
) -> Result<ContentHash, ValidatorError> {
    let bytes = canonical_json_bytes(content)
        .map_err(|err| ValidatorError::Serialization(err.to_string()))?;
    Ok(hasher.hash(&bytes))
}

/// An injected check evaluated alongside the policy's built-in checks.
///
/// This is the seam for checks that consult capabilities (recall lookups,
/// embedding similarity); a check that cannot reach its dependency returns
/// `DependencyUnavailable`.
#[async_trait]
pub trait ProposalCheck: Send + Sync {
    fn name(&self) -> &str;

    async fn evaluate(&self, proposal: &Proposal<Draft>) -> Result<CheckResult, ValidatorError>;
}

/// What a successful validator run yields: the internally-transitioned
/// proposal and the proof bound to it.
#[derive(Debug)]
pub struct ValidationOutcome {
    pub proposal: Proposal<Validated>,
    pub report: ValidationReport,
}

impl ValidationOutcome {
    pub fn into_parts(self) -> (Proposal<Validated>, ValidationReport) {
        (self.proposal, self.report)
    }
}

/// The validation gate.
///
/// Accepts only `Proposal<Draft>` — there is deliberately no entry point
/// for `Validated`, so re-validation drift is unrepresentable. On success
/// the emitted report is bound to the proposal id and the content hash at
/// validation time.
pub struct Validator {
    clock: Arc<dyn Clock>,
    extra_checks: Vec<Box<dyn ProposalCheck>>,
    hasher: Arc<dyn ContentHasher>,
}

impl Validator {
    pub fn new(hasher: Arc<dyn ContentHasher>, clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            extra_checks: Vec::new(),
            hasher,
        }
    }

    /// Register a capability-backed check run after the policy's built-in
    /// checks.
    pub fn with_check(mut self, check: Box<dyn ProposalCheck>) -> Self {
        self.extra_checks.push(check);
        self
    }

    /// Validate a draft against a policy, all-or-nothing.
    ///
    /// Every check runs; if any required check fails the whole run fails
    /// with `InvariantViolation` and no report exists. On success the
    /// internal lifecycle transition yields the `Validated` proposal
    /// together with its bound report.
    pub async fn validate(
        &self,
        proposal: Proposal<Draft>,
        policy: &ValidationPolicy,
    ) -> Result<ValidationOutcome, ValidatorError> {
        if policy.checks.is_empty() && self.extra_checks.is_empty() {
            return Err(ValidatorError::EmptyPolicy {
                policy: policy.id.clone(),
            });
        }

        debug!(
            proposal_id = %proposal.id(),
            policy = %policy.id,
            checks = policy.checks.len() + self.extra_checks.len(),
            "Validating proposal"
        );

        let mut results: Vec<CheckResult> = policy
            .checks
            .iter()
            .map(|check| check.evaluate(&proposal))
            .collect();

        for check in &self.extra_checks {
            results.push(check.evaluate(&proposal).await?);
        }

        let total = results.len();
        let failures: Vec<&CheckResult> = results
            .iter()
            .filter(|r| r.required && !r.passed)
            .collect();

        if let Some(first) = failures.first() {
            warn!(
                proposal_id = %proposal.id(),
                policy = %policy.id,
                failed = failures.len(),
                check = %first.check,
                "Validation failed"
            );
            return Err(ValidatorError::ChecksFailed {
                proposal_id: proposal.id(),
                failed: failures.len(),
                total,
                first_failure: first.check.clone(),
            });
        }

        let content_hash = content_hash_of(self.hasher.as_ref(), proposal.content())?;
        let report = ValidationReport {
            bound_content_hash: content_hash,
            bound_proposal_id: proposal.id(),
            checks: results,
            issued_at: self.clock.now(),
            policy: policy.id.clone(),
            report_id: ReportId::new(),
            summary: format!("{total}/{total} checks passed"),
            token: ProofToken(()),
        };

        info!(
            proposal_id = %proposal.id(),
            report_id = %report.report_id(),
            policy = %policy.id,
            "Proposal validated"
        );

        Ok(ValidationOutcome {
            proposal: proposal.into_validated(),
            report,
        })
    }
}
