use std::marker::PhantomData;

use attest_types::{Actor, ProposalId, SequenceNo};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Lifecycle state marker. Sealed: only [`Draft`] and [`Validated`] exist,
/// and external crates cannot add states.
pub trait LifecycleState: sealed::Sealed + Send + Sync + 'static {
    const NAME: &'static str;
}

/// An unvalidated, agent-produced candidate.
#[derive(Clone, Copy, Debug)]
pub struct Draft;

/// A proposal that passed validation. Producible only by the internal
/// transition invoked from [`crate::Validator::validate`].
#[derive(Clone, Copy, Debug)]
pub struct Validated;

impl sealed::Sealed for Draft {}
impl sealed::Sealed for Validated {}

impl LifecycleState for Draft {
    const NAME: &'static str = "draft";
}

impl LifecycleState for Validated {
    const NAME: &'static str = "validated";
}

/// The claim a proposal makes: what kind of knowledge, the body text, and
/// the proposing agent's confidence in it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProposalContent {
    pub body: String,
    pub confidence: f64,
    pub kind: String,
}

impl ProposalContent {
    pub fn new(kind: impl Into<String>, body: impl Into<String>, confidence: f64) -> Self {
        Self {
            body: body.into(),
            confidence,
            kind: kind.into(),
        }
    }
}

/// A candidate unit of content, tagged with its lifecycle state.
///
/// Cloneable: validation consumes a proposal value, so callers clone when
/// they want to retry or race. Identity (and therefore the at-most-one
/// promotion rule) follows the id, not the value.
#[derive(Clone, Debug)]
pub struct Proposal<S: LifecycleState> {
    id: ProposalId,
    content: ProposalContent,
    observed: Vec<SequenceNo>,
    submitted_by: Actor,
    submitted_at: DateTime<Utc>,
    _state: PhantomData<S>,
}

impl Proposal<Draft> {
    /// The only public constructor; every proposal starts as a draft.
    pub fn draft(
        content: ProposalContent,
        observed: Vec<SequenceNo>,
        submitted_by: Actor,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: ProposalId::new(),
            content,
            observed,
            submitted_by,
            submitted_at,
            _state: PhantomData,
        }
    }

    /// The internal lifecycle transition. Reachable only from the
    /// validator in this crate.
    pub(crate) fn into_validated(self) -> Proposal<Validated> {
        Proposal {
            id: self.id,
            content: self.content,
            observed: self.observed,
            submitted_by: self.submitted_by,
            submitted_at: self.submitted_at,
            _state: PhantomData,
        }
    }
}

impl<S: LifecycleState> Proposal<S> {
    pub fn id(&self) -> ProposalId {
        self.id
    }

    pub fn content(&self) -> &ProposalContent {
        &self.content
    }

    pub fn observed(&self) -> &[SequenceNo] {
        &self.observed
    }

    pub fn submitted_by(&self) -> &Actor {
        &self.submitted_by
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }

    pub fn state_name(&self) -> &'static str {
        S::NAME
    }

    /// Serializable audit-tier projection.
    pub fn to_submitted(&self) -> SubmittedProposal {
        SubmittedProposal {
            content: self.content.clone(),
            id: self.id,
            observed: self.observed.clone(),
            state: S::NAME.to_string(),
            submitted_at: self.submitted_at,
            submitted_by: self.submitted_by.clone(),
        }
    }
}

/// Audit-tier projection of a proposal. Fields declared alphabetically
/// for stable JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SubmittedProposal {
    pub content: ProposalContent,
    pub id: ProposalId,
    pub observed: Vec<SequenceNo>,
    pub state: String,
    pub submitted_at: DateTime<Utc>,
    pub submitted_by: Actor,
}

impl attest_types::PersistSchema for SubmittedProposal {
    const SCHEMA_VERSION: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> Proposal<Draft> {
        Proposal::draft(
            ProposalContent::new("observation", "disk usage at 91%", 0.8),
            vec![SequenceNo(4)],
            Actor::agent("observer", "run-1"),
            Utc::now(),
        )
    }

    #[test]
    fn drafts_get_fresh_ids() {
        assert_ne!(draft().id(), draft().id());
    }

    #[test]
    fn transition_preserves_identity_and_content() {
        let proposal = draft();
        let id = proposal.id();
        let body = proposal.content().body.clone();

        let validated = proposal.into_validated();
        assert_eq!(validated.id(), id);
        assert_eq!(validated.content().body, body);
        assert_eq!(validated.state_name(), "validated");
    }

    #[test]
    fn submitted_projection_is_alphabetical() {
        let json = serde_json::to_string(&draft().to_submitted()).unwrap();
        let keys = ["\"content\"", "\"id\"", "\"observed\"", "\"state\"", "\"submitted_at\"", "\"submitted_by\""];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
