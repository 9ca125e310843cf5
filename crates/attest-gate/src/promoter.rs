use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use attest_types::{canonical_json_bytes, Clock, ContentHasher, CorrectionId, FactId, ProposalId};
use tracing::{info, warn};

use crate::error::{LedgerError, PromoterError};
use crate::fact::{CorrectionEvent, Fact, PromotionContext, PromotionRecord};
use crate::ledger::FactLedger;
use crate::proposal::{Proposal, Validated};
use crate::report::ValidationReport;

/// The promotion boundary.
///
/// Consumes a `Validated` proposal (unobtainable except via the
/// validator) together with its matching report and the promotion
/// context, and emits an immutable [`Fact`] into the ledger. Each
/// proposal id promotes at most once; the consumption registry and the
/// ledger append happen under one lock, so concurrent promotions of the
/// same proposal cannot both win.
pub struct Promoter {
    clock: Arc<dyn Clock>,
    consumed: Mutex<HashSet<ProposalId>>,
    hasher: Arc<dyn ContentHasher>,
    ledger: Arc<FactLedger>,
}

impl Promoter {
    pub fn new(hasher: Arc<dyn ContentHasher>, clock: Arc<dyn Clock>) -> Self {
        Self::with_ledger(Arc::new(FactLedger::new()), hasher, clock)
    }

    pub fn with_ledger(
        ledger: Arc<FactLedger>,
        hasher: Arc<dyn ContentHasher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            clock,
            consumed: Mutex::new(HashSet::new()),
            hasher,
            ledger,
        }
    }

    /// The append-only fact store this promoter writes to.
    pub fn ledger(&self) -> &FactLedger {
        &self.ledger
    }

    pub fn ledger_handle(&self) -> Arc<FactLedger> {
        Arc::clone(&self.ledger)
    }

    /// Promote a validated proposal into a fact.
    ///
    /// Rejected with `InvariantViolation` when the report is bound to a
    /// different proposal, when the content hash no longer matches, or
    /// when the proposal id has already been promoted (consumed report).
    pub async fn promote(
        &self,
        proposal: Proposal<Validated>,
        report: ValidationReport,
        context: PromotionContext,
    ) -> Result<Fact, PromoterError> {
        self.verify_binding(&proposal, &report)?;

        let fact = Fact {
            content: proposal.content().clone(),
            id: FactId::new(),
            promoted_at: self.clock.now(),
            promotion: PromotionRecord {
                actor: context.actor,
                consumed_content_hash: report.content_hash(),
                consumed_report: report.report_id(),
                evidence: context.evidence,
                policy: report.policy().clone(),
                proposal: proposal.id(),
                trace: context.trace,
            },
        };

        self.consume_and_append(proposal.id(), fact.clone())?;

        info!(
            fact_id = %fact.id,
            proposal_id = %proposal.id(),
            report_id = %report.report_id(),
            actor = %fact.promotion.actor,
            "Proposal promoted to fact"
        );

        Ok(fact)
    }

    /// Promote a correction: a new fact referencing, never replacing, an
    /// existing one. The original fact is untouched.
    pub async fn promote_correction(
        &self,
        original: &FactId,
        proposal: Proposal<Validated>,
        report: ValidationReport,
        context: PromotionContext,
        reason: impl Into<String>,
    ) -> Result<(Fact, CorrectionEvent), PromoterError> {
        if !self.ledger.contains(original) {
            return Err(PromoterError::OriginalFactNotFound(*original));
        }

        let actor = context.actor.clone();
        let replacement = self.promote(proposal, report, context).await?;

        let correction = CorrectionEvent {
            actor,
            corrected_at: self.clock.now(),
            corrects: *original,
            id: CorrectionId::new(),
            reason: reason.into(),
            replacement: replacement.id,
        };
        self.ledger.record_correction(correction.clone())?;

        Ok((replacement, correction))
    }

    fn verify_binding(
        &self,
        proposal: &Proposal<Validated>,
        report: &ValidationReport,
    ) -> Result<(), PromoterError> {
        if report.proposal_id() != proposal.id() {
            warn!(
                proposal_id = %proposal.id(),
                report_bound = %report.proposal_id(),
                "Promotion rejected: report bound to a different proposal"
            );
            return Err(PromoterError::ReportProposalMismatch {
                presented: proposal.id(),
                report_bound: report.proposal_id(),
            });
        }

        let bytes = canonical_json_bytes(proposal.content())
            .map_err(|err| PromoterError::Serialization(err.to_string()))?;
        if self.hasher.hash(&bytes) != report.content_hash() {
            warn!(
                proposal_id = %proposal.id(),
                "Promotion rejected: content hash no longer matches report"
            );
            return Err(PromoterError::ContentHashMismatch {
                proposal_id: proposal.id(),
            });
        }

        Ok(())
    }

    /// Mark the proposal consumed and append the fact under one lock, so
    /// the at-most-once rule holds under concurrency.
    fn consume_and_append(&self, proposal_id: ProposalId, fact: Fact) -> Result<(), PromoterError> {
        let mut consumed = self
            .consumed
            .lock()
            .map_err(|_| PromoterError::Ledger(LedgerError::Poisoned))?;

        if consumed.contains(&proposal_id) {
            warn!(
                proposal_id = %proposal_id,
                "Promotion rejected: report already consumed"
            );
            return Err(PromoterError::AlreadyPromoted(proposal_id));
        }

        self.ledger.append(fact)?;
        consumed.insert(proposal_id);
        Ok(())
    }
}
