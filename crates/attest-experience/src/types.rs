use attest_types::{SequenceNo, TraceLink};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded observation or action.
///
/// The payload is opaque JSON owned by the producer; the kernel cares only
/// about ordering, provenance and the event kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEvent {
    pub kind: String,
    pub payload: serde_json::Value,
    pub recorded_at: DateTime<Utc>,
    pub source: String,
    pub trace: TraceLink,
}

impl ExperienceEvent {
    pub fn new(
        kind: impl Into<String>,
        source: impl Into<String>,
        payload: serde_json::Value,
        trace: TraceLink,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            kind: kind.into(),
            payload,
            recorded_at,
            source: source.into(),
            trace,
        }
    }
}

/// A half-open sequence range `[from, to)` for replay. `to = None` means
/// "to the current head".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayRange {
    pub from: SequenceNo,
    pub to: Option<SequenceNo>,
}

impl ReplayRange {
    pub fn from(from: SequenceNo) -> Self {
        Self { from, to: None }
    }

    pub fn bounded(from: SequenceNo, to: SequenceNo) -> Self {
        Self { from, to: Some(to) }
    }

    /// Everything recorded so far.
    pub fn all() -> Self {
        Self {
            from: SequenceNo(0),
            to: None,
        }
    }

    pub fn contains(&self, seq: SequenceNo) -> bool {
        seq >= self.from && self.to.map(|to| seq < to).unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_is_half_open() {
        let range = ReplayRange::bounded(SequenceNo(2), SequenceNo(5));
        assert!(!range.contains(SequenceNo(1)));
        assert!(range.contains(SequenceNo(2)));
        assert!(range.contains(SequenceNo(4)));
        assert!(!range.contains(SequenceNo(5)));
    }

    #[test]
    fn open_range_runs_to_head() {
        let range = ReplayRange::from(SequenceNo(3));
        assert!(range.contains(SequenceNo(1_000_000)));
        assert!(!range.contains(SequenceNo(2)));
    }
}
