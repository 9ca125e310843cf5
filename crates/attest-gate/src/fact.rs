use attest_types::{
    Actor, ContentHash, CorrectionId, EvidenceRef, FactId, PolicyId, ProposalId, ReportId,
    TraceLink,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::proposal::ProposalContent;

/// What the promoting caller supplies alongside proposal and report: who
/// approves, on what evidence, and the trace link tying the promotion to
/// its run.
#[derive(Clone, Debug)]
pub struct PromotionContext {
    pub actor: Actor,
    pub evidence: Vec<EvidenceRef>,
    pub trace: TraceLink,
}

impl PromotionContext {
    pub fn new(actor: Actor, evidence: Vec<EvidenceRef>, trace: TraceLink) -> Self {
        Self {
            actor,
            evidence,
            trace,
        }
    }
}

/// Who/when/which gate/which evidence — attached at promotion time,
/// immutable after. Fields declared alphabetically for stable JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PromotionRecord {
    pub actor: Actor,
    pub consumed_content_hash: ContentHash,
    pub consumed_report: ReportId,
    pub evidence: Vec<EvidenceRef>,
    pub policy: PolicyId,
    pub proposal: ProposalId,
    pub trace: TraceLink,
}

/// An immutable, promoted, audited unit of content.
///
/// No mutating operations exist; corrections are separate
/// [`CorrectionEvent`]s referencing, not replacing, this fact. Fields
/// declared alphabetically for stable JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Fact {
    pub content: ProposalContent,
    pub id: FactId,
    pub promoted_at: DateTime<Utc>,
    pub promotion: PromotionRecord,
}

impl attest_types::PersistSchema for Fact {
    const SCHEMA_VERSION: u32 = 1;
}

/// A correction: a new fact that supersedes an existing one without
/// touching it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrectionEvent {
    pub actor: Actor,
    pub corrected_at: DateTime<Utc>,
    pub corrects: FactId,
    pub id: CorrectionId,
    pub reason: String,
    pub replacement: FactId,
}

impl attest_types::PersistSchema for CorrectionEvent {
    const SCHEMA_VERSION: u32 = 1;
}
