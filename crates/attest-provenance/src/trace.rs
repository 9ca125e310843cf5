use attest_types::{canonical_json_bytes, ContentHash, TraceLink};
use serde::{Deserialize, Serialize};

use crate::replay::Replayability;

/// Sampler parameters recorded for replay. Fields declared alphabetically
/// for stable JSON.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SamplerParams {
    pub max_tokens: Option<u32>,
    pub temperature: f64,
    pub top_p: f64,
}

impl Default for SamplerParams {
    fn default() -> Self {
        Self {
            max_tokens: None,
            temperature: 1.0,
            top_p: 1.0,
        }
    }
}

/// Provenance of a call served by locally-pinned weights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocalTrace {
    pub adapter_hash: Option<ContentHash>,
    pub model_hash: ContentHash,
    pub sampler: SamplerParams,
    pub seed: Option<u64>,
    pub tokenizer_hash: ContentHash,
}

/// Provenance of a call served by a remote provider. Audit-only: the
/// provider may reroute, requantize or retire the model at any time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RemoteTrace {
    pub model_id: String,
    pub provider: String,
    pub request_fingerprint: ContentHash,
}

impl RemoteTrace {
    /// Fingerprint a request body: BLAKE3 over its canonical JSON.
    pub fn fingerprint<T: Serialize>(request: &T) -> Result<ContentHash, serde_json::Error> {
        let bytes = canonical_json_bytes(request)?;
        Ok(ContentHash(*blake3::hash(&bytes).as_bytes()))
    }
}

/// The kernel-boundary call trace recorded alongside every LLM response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CallTrace {
    Local(LocalTrace),
    Remote(RemoteTrace),
}

impl CallTrace {
    /// Grade replay eligibility.
    ///
    /// A local call with a recorded seed replays deterministically; without
    /// one, replay is best-effort. Remote calls are never replayable.
    pub fn replayability(&self) -> Replayability {
        match self {
            CallTrace::Local(local) if local.seed.is_some() => Replayability::Deterministic,
            CallTrace::Local(_) => Replayability::BestEffort,
            CallTrace::Remote(_) => Replayability::None,
        }
    }

    /// Local ⇒ true, Remote ⇒ false. Must agree with
    /// [`TraceLink::is_replay_eligible`] for the projected marker.
    pub fn is_replay_eligible(&self) -> bool {
        matches!(self, CallTrace::Local(_))
    }

    /// Project onto the lightweight marker, supplying the ids the light
    /// form carries. The replay verdict is preserved by construction.
    pub fn to_trace_link(
        &self,
        trace_id: impl Into<String>,
        span_id: impl Into<String>,
    ) -> TraceLink {
        match self {
            CallTrace::Local(_) => TraceLink::local(trace_id, span_id),
            CallTrace::Remote(remote) => TraceLink::remote(
                remote.provider.clone(),
                remote.request_fingerprint.to_hex(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_types::{Blake3Hasher, ContentHasher};

    fn local(seed: Option<u64>) -> CallTrace {
        CallTrace::Local(LocalTrace {
            adapter_hash: None,
            model_hash: Blake3Hasher.hash(b"model-weights"),
            sampler: SamplerParams::default(),
            seed,
            tokenizer_hash: Blake3Hasher.hash(b"tokenizer"),
        })
    }

    fn remote() -> CallTrace {
        CallTrace::Remote(RemoteTrace {
            model_id: "gpt-large".into(),
            provider: "acme".into(),
            request_fingerprint: Blake3Hasher.hash(b"request"),
        })
    }

    #[test]
    fn seeded_local_is_deterministic() {
        assert_eq!(local(Some(7)).replayability(), Replayability::Deterministic);
    }

    #[test]
    fn unseeded_local_is_best_effort() {
        assert_eq!(local(None).replayability(), Replayability::BestEffort);
        assert!(local(None).is_replay_eligible());
    }

    #[test]
    fn remote_is_audit_only() {
        assert_eq!(remote().replayability(), Replayability::None);
        assert!(!remote().is_replay_eligible());
    }

    #[test]
    fn projection_preserves_the_verdict() {
        let link = local(Some(1)).to_trace_link("t-1", "s-1");
        assert!(link.is_replay_eligible());

        let link = remote().to_trace_link("t-1", "s-1");
        assert!(!link.is_replay_eligible());
    }

    #[test]
    fn fingerprint_is_stable_across_key_order() {
        #[derive(Serialize)]
        struct A {
            b: u32,
            a: u32,
        }
        #[derive(Serialize)]
        struct B {
            a: u32,
            b: u32,
        }
        let fa = RemoteTrace::fingerprint(&A { b: 2, a: 1 }).unwrap();
        let fb = RemoteTrace::fingerprint(&B { a: 1, b: 2 }).unwrap();
        assert_eq!(fa, fb);
    }
}
