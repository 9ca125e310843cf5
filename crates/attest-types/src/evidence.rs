use serde::{Deserialize, Serialize};

use crate::ids::{FactId, SequenceNo};

/// A reference to the evidence backing a promotion.
///
/// Evidence is referenced, never embedded: the kernel stores pointers into
/// collaborator-owned stores (observation log, approval system, fact
/// ledger) so promotion records stay small and immutable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceRef {
    /// A recorded observation in the experience log.
    Observation { sequence: SequenceNo, source: String },
    /// An explicit human sign-off.
    HumanApproval { approval_id: String, approver: String },
    /// Derived from one or more existing facts.
    Derived { facts: Vec<FactId> },
}

impl EvidenceRef {
    pub fn observation(sequence: SequenceNo, source: impl Into<String>) -> Self {
        EvidenceRef::Observation {
            sequence,
            source: source.into(),
        }
    }

    pub fn human_approval(approval_id: impl Into<String>, approver: impl Into<String>) -> Self {
        EvidenceRef::HumanApproval {
            approval_id: approval_id.into(),
            approver: approver.into(),
        }
    }

    pub fn derived(facts: Vec<FactId>) -> Self {
        EvidenceRef::Derived { facts }
    }
}
