use tracing::debug;

use crate::meter::{CycleBudget, FactBudget, TokenBudget};
use crate::stop::StopReason;

/// The amount a reservation costs against each budget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BudgetCost {
    pub cycles: u64,
    pub facts: u64,
    pub tokens: u64,
}

impl BudgetCost {
    pub fn cycles(n: u64) -> Self {
        Self {
            cycles: n,
            ..Self::default()
        }
    }

    pub fn facts(n: u64) -> Self {
        Self {
            facts: n,
            ..Self::default()
        }
    }

    pub fn tokens(n: u64) -> Self {
        Self {
            tokens: n,
            ..Self::default()
        }
    }
}

/// Composition of the cycle, fact and token ceilings. Budgets not
/// configured are unlimited.
#[derive(Debug, Default)]
pub struct ExecutionBudget {
    cycles: Option<CycleBudget>,
    facts: Option<FactBudget>,
    tokens: Option<TokenBudget>,
}

impl ExecutionBudget {
    pub fn unlimited() -> Self {
        Self::default()
    }

    pub fn with_cycle_limit(mut self, limit: u64) -> Self {
        self.cycles = Some(CycleBudget::new(limit));
        self
    }

    pub fn with_fact_limit(mut self, limit: u64) -> Self {
        self.facts = Some(FactBudget::new(limit));
        self
    }

    pub fn with_token_limit(mut self, limit: u64) -> Self {
        self.tokens = Some(TokenBudget::new(limit));
        self
    }

    pub fn cycles(&self) -> Option<&CycleBudget> {
        self.cycles.as_ref()
    }

    pub fn facts(&self) -> Option<&FactBudget> {
        self.facts.as_ref()
    }

    pub fn tokens(&self) -> Option<&TokenBudget> {
        self.tokens.as_ref()
    }

    /// Reserve against all configured budgets, all-or-nothing.
    ///
    /// Reservations are taken in a fixed order (cycles, facts, tokens); a
    /// later insufficiency releases the earlier reservations before the
    /// exhaustion is reported, so no partial consumption persists.
    pub fn try_reserve(&self, cost: BudgetCost) -> Result<(), StopReason> {
        let cycle_taken = match &self.cycles {
            Some(budget) if cost.cycles > 0 => {
                if !budget.try_reserve(cost.cycles) {
                    debug!(consumed = budget.consumed(), limit = budget.limit(), "Cycle budget exhausted");
                    return Err(budget.stop_reason());
                }
                true
            }
            _ => false,
        };

        let fact_taken = match &self.facts {
            Some(budget) if cost.facts > 0 => {
                if !budget.try_reserve(cost.facts) {
                    if let (true, Some(cycles)) = (cycle_taken, &self.cycles) {
                        cycles.release(cost.cycles);
                    }
                    debug!(consumed = budget.consumed(), limit = budget.limit(), "Fact budget exhausted");
                    return Err(budget.stop_reason());
                }
                true
            }
            _ => false,
        };

        if let Some(budget) = &self.tokens {
            if cost.tokens > 0 && !budget.try_reserve(cost.tokens) {
                if let (true, Some(cycles)) = (cycle_taken, &self.cycles) {
                    cycles.release(cost.cycles);
                }
                if let (true, Some(facts)) = (fact_taken, &self.facts) {
                    facts.release(cost.facts);
                }
                debug!(consumed = budget.consumed(), limit = budget.limit(), "Token budget exhausted");
                return Err(budget.stop_reason());
            }
        }

        Ok(())
    }

    /// First exhausted budget, if any, as its stop reason. The governing
    /// loop calls this once per cycle.
    pub fn check(&self) -> Option<StopReason> {
        if let Some(budget) = &self.cycles {
            if budget.exhausted() {
                return Some(budget.stop_reason());
            }
        }
        if let Some(budget) = &self.facts {
            if budget.exhausted() {
                return Some(budget.stop_reason());
            }
        }
        if let Some(budget) = &self.tokens {
            if budget.exhausted() {
                return Some(budget.stop_reason());
            }
        }
        None
    }

    /// Convenience: charge one governing-loop cycle.
    pub fn charge_cycle(&self) -> Result<(), StopReason> {
        self.try_reserve(BudgetCost::cycles(1))
    }
}
