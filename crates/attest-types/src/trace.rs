use serde::{Deserialize, Serialize};

/// Lightweight provenance marker.
///
/// `Local` evidence was produced inside this deployment and can be
/// replayed from recorded inputs; `Remote` evidence lives in an external
/// system and is audit-only. The verdict is absolute: Local is replay
/// eligible, Remote never is. A richer kernel-boundary representation
/// lives in `attest-provenance`; a conformance suite keeps the two
/// verdicts in agreement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TraceLink {
    Local {
        sampled: bool,
        span_id: String,
        trace_id: String,
    },
    Remote {
        reference: String,
        system: String,
    },
}

impl TraceLink {
    pub fn local(trace_id: impl Into<String>, span_id: impl Into<String>) -> Self {
        TraceLink::Local {
            sampled: true,
            span_id: span_id.into(),
            trace_id: trace_id.into(),
        }
    }

    pub fn remote(system: impl Into<String>, reference: impl Into<String>) -> Self {
        TraceLink::Remote {
            reference: reference.into(),
            system: system.into(),
        }
    }

    /// Local ⇒ true, Remote ⇒ false. No exceptions.
    pub fn is_replay_eligible(&self) -> bool {
        matches!(self, TraceLink::Local { .. })
    }
}

impl std::fmt::Display for TraceLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TraceLink::Local { trace_id, span_id, .. } => {
                write!(f, "local:{trace_id}/{span_id}")
            }
            TraceLink::Remote { system, reference } => {
                write!(f, "remote:{system}/{reference}")
            }
        }
    }
}
