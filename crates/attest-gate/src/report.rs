use attest_types::{ContentHash, PolicyId, ProposalId, ReportId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Proof that a report was emitted by a validator run in this crate.
///
/// Zero-sized and deliberately unconstructible from outside: no `new`, no
/// `Default`, no serde. External code can hold a report but never mint
/// one.
#[derive(Clone, Debug)]
pub struct ProofToken(pub(crate) ());

/// Outcome of a single policy check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CheckResult {
    pub check: String,
    pub detail: Option<String>,
    pub passed: bool,
    pub required: bool,
}

/// The unforgeable proof a validator run emits.
///
/// Bound to one proposal id and the content hash at validation time, so
/// post-validation content mutation invalidates the proof downstream.
/// NOT serializable — persistence uses [`ValidationSummary`].
#[derive(Clone, Debug)]
pub struct ValidationReport {
    pub(crate) bound_content_hash: ContentHash,
    pub(crate) bound_proposal_id: ProposalId,
    pub(crate) checks: Vec<CheckResult>,
    pub(crate) issued_at: DateTime<Utc>,
    pub(crate) policy: PolicyId,
    pub(crate) report_id: ReportId,
    pub(crate) summary: String,
    #[allow(dead_code)]
    pub(crate) token: ProofToken,
}

impl ValidationReport {
    pub fn report_id(&self) -> ReportId {
        self.report_id
    }

    pub fn proposal_id(&self) -> ProposalId {
        self.bound_proposal_id
    }

    pub fn content_hash(&self) -> ContentHash {
        self.bound_content_hash
    }

    pub fn policy(&self) -> &PolicyId {
        &self.policy
    }

    pub fn checks(&self) -> &[CheckResult] {
        &self.checks
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Serializable projection for the persistence/audit tier. The proof
    /// token itself never serializes.
    pub fn to_summary(&self) -> ValidationSummary {
        ValidationSummary {
            checks: self.checks.clone(),
            content_hash: self.bound_content_hash,
            issued_at: self.issued_at,
            policy: self.policy.clone(),
            proposal_id: self.bound_proposal_id,
            report_id: self.report_id,
            summary: self.summary.clone(),
        }
    }
}

/// Audit-tier projection of a validation report. Fields declared
/// alphabetically for stable JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub checks: Vec<CheckResult>,
    pub content_hash: ContentHash,
    pub issued_at: DateTime<Utc>,
    pub policy: PolicyId,
    pub proposal_id: ProposalId,
    pub report_id: ReportId,
    pub summary: String,
}

impl attest_types::PersistSchema for ValidationSummary {
    const SCHEMA_VERSION: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_types::{Blake3Hasher, ContentHasher};

    fn report() -> ValidationReport {
        ValidationReport {
            bound_content_hash: Blake3Hasher.hash(b"content"),
            bound_proposal_id: ProposalId::new(),
            checks: vec![CheckResult {
                check: "content_not_empty".into(),
                detail: None,
                passed: true,
                required: true,
            }],
            issued_at: Utc::now(),
            policy: PolicyId("default".into()),
            report_id: ReportId::new(),
            summary: "1/1 checks passed".into(),
            token: ProofToken(()),
        }
    }

    #[test]
    fn summary_projection_round_trips() {
        let summary = report().to_summary();
        let json = serde_json::to_string(&summary).unwrap();
        let back: ValidationSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, summary);
    }

    #[test]
    fn summary_keys_are_alphabetical() {
        let json = serde_json::to_string(&report().to_summary()).unwrap();
        let keys = [
            "\"checks\"",
            "\"content_hash\"",
            "\"issued_at\"",
            "\"policy\"",
            "\"proposal_id\"",
            "\"report_id\"",
            "\"summary\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
