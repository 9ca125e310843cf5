use serde::{Deserialize, Serialize};

/// The closed set of legitimate halt reasons for a bounded multi-cycle
/// process.
///
/// Success (`Converged`, `CriteriaMet`), cancellation and budget
/// exhaustion are sibling variants of one union — exhaustion is a normal
/// stop, not an error, and always carries consumed and limit so an
/// operator can act without reading source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum StopReason {
    /// The process reached a fixed point on its own.
    Converged,
    /// Explicit success criteria were met.
    CriteriaMet,
    /// The caller cancelled the run.
    UserCancelled,
    CycleBudgetExhausted { consumed: u64, limit: u64 },
    FactBudgetExhausted { consumed: u64, limit: u64 },
    TokenBudgetExhausted { consumed: u64, limit: u64 },
}

impl StopReason {
    /// Did the run stop because some budget ran out?
    pub fn is_budget_exhaustion(&self) -> bool {
        matches!(
            self,
            StopReason::CycleBudgetExhausted { .. }
                | StopReason::FactBudgetExhausted { .. }
                | StopReason::TokenBudgetExhausted { .. }
        )
    }

    /// Did the run stop successfully on its own terms?
    pub fn is_success(&self) -> bool {
        matches!(self, StopReason::Converged | StopReason::CriteriaMet)
    }
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StopReason::Converged => write!(f, "converged"),
            StopReason::CriteriaMet => write!(f, "criteria met"),
            StopReason::UserCancelled => write!(f, "user cancelled"),
            StopReason::CycleBudgetExhausted { consumed, limit } => {
                write!(f, "cycle budget exhausted ({consumed}/{limit})")
            }
            StopReason::FactBudgetExhausted { consumed, limit } => {
                write!(f, "fact budget exhausted ({consumed}/{limit})")
            }
            StopReason::TokenBudgetExhausted { consumed, limit } => {
                write!(f, "token budget exhausted ({consumed}/{limit})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exhaustion_is_not_success_and_vice_versa() {
        let exhausted = StopReason::CycleBudgetExhausted {
            consumed: 5,
            limit: 5,
        };
        assert!(exhausted.is_budget_exhaustion());
        assert!(!exhausted.is_success());

        assert!(StopReason::Converged.is_success());
        assert!(!StopReason::Converged.is_budget_exhaustion());

        assert!(!StopReason::UserCancelled.is_success());
        assert!(!StopReason::UserCancelled.is_budget_exhaustion());
    }

    #[test]
    fn serializes_with_tagged_reason_and_numbers() {
        let reason = StopReason::TokenBudgetExhausted {
            consumed: 900,
            limit: 1000,
        };
        let json = serde_json::to_string(&reason).unwrap();
        assert!(json.contains("\"reason\":\"token_budget_exhausted\""));
        assert!(json.contains("\"consumed\":900"));
        assert!(json.contains("\"limit\":1000"));
    }

    #[test]
    fn display_carries_consumed_and_limit() {
        let reason = StopReason::FactBudgetExhausted {
            consumed: 3,
            limit: 3,
        };
        assert_eq!(reason.to_string(), "fact budget exhausted (3/3)");
    }
}
