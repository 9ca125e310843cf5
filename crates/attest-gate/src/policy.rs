use attest_types::PolicyId;
use serde::{Deserialize, Serialize};

use crate::proposal::{Draft, Proposal};
use crate::report::CheckResult;

/// One named validation check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum PolicyCheck {
    ContentNotEmpty,
    ConfidenceAtLeast { threshold: f64 },
    KindAllowed { kinds: Vec<String> },
    ObservationRequired,
    BodyMaxBytes { max: usize },
}

impl PolicyCheck {
    pub fn name(&self) -> &'static str {
        match self {
            PolicyCheck::ContentNotEmpty => "content_not_empty",
            PolicyCheck::ConfidenceAtLeast { .. } => "confidence_at_least",
            PolicyCheck::KindAllowed { .. } => "kind_allowed",
            PolicyCheck::ObservationRequired => "observation_required",
            PolicyCheck::BodyMaxBytes { .. } => "body_max_bytes",
        }
    }

    pub(crate) fn evaluate(&self, proposal: &Proposal<Draft>) -> CheckResult {
        let (passed, detail) = match self {
            PolicyCheck::ContentNotEmpty => {
                let empty = proposal.content().body.trim().is_empty();
                (!empty, empty.then(|| "body is empty".to_string()))
            }
            PolicyCheck::ConfidenceAtLeast { threshold } => {
                let confidence = proposal.content().confidence;
                (
                    confidence >= *threshold,
                    (confidence < *threshold)
                        .then(|| format!("confidence {confidence} below threshold {threshold}")),
                )
            }
            PolicyCheck::KindAllowed { kinds } => {
                let kind = &proposal.content().kind;
                (
                    kinds.contains(kind),
                    (!kinds.contains(kind)).then(|| format!("kind '{kind}' not allowed")),
                )
            }
            PolicyCheck::ObservationRequired => {
                let has = !proposal.observed().is_empty();
                (has, (!has).then(|| "no observation provenance".to_string()))
            }
            PolicyCheck::BodyMaxBytes { max } => {
                let len = proposal.content().body.len();
                (
                    len <= *max,
                    (len > *max).then(|| format!("body is {len} bytes, max {max}")),
                )
            }
        };

        CheckResult {
            check: self.name().to_string(),
            detail,
            passed,
            required: true,
        }
    }
}

/// A named, ordered set of checks. Validation is all-or-nothing per
/// policy: one failed required check fails the whole run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationPolicy {
    pub checks: Vec<PolicyCheck>,
    pub id: PolicyId,
}

impl ValidationPolicy {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            checks: Vec::new(),
            id: PolicyId(id.into()),
        }
    }

    pub fn with_check(mut self, check: PolicyCheck) -> Self {
        self.checks.push(check);
        self
    }

    /// The baseline policy: non-empty content only.
    pub fn content_not_empty(id: impl Into<String>) -> Self {
        Self::new(id).with_check(PolicyCheck::ContentNotEmpty)
    }
}
