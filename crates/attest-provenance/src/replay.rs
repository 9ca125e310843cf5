use serde::{Deserialize, Serialize};

/// How eligible a recorded call is for replay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Replayability {
    /// Replaying the recorded inputs reproduces the output bit-for-bit
    /// (local weights, pinned tokenizer, recorded seed).
    Deterministic,
    /// Replay is possible but the output may differ (local call without a
    /// recorded seed).
    BestEffort,
    /// Even best-effort replay is infeasible; the trace is audit-only.
    None,
}

impl Replayability {
    /// Deterministic and BestEffort are eligible; None is not.
    pub fn is_replay_eligible(self) -> bool {
        !matches!(self, Replayability::None)
    }
}

impl std::fmt::Display for Replayability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Replayability::Deterministic => "deterministic",
            Replayability::BestEffort => "best_effort",
            Replayability::None => "none",
        };
        f.write_str(name)
    }
}
