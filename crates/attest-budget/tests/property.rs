//! Property tests for budget laws.
//!
//! - `try_reserve` never partially consumes a single budget.
//! - The composed `ExecutionBudget` reservation is all-or-nothing across
//!   budgets: after any failed reservation, consumption is exactly what it
//!   was before the attempt.
//! - Reserving exactly the remaining amount succeeds once and flips
//!   `exhausted()`.

use attest_budget::{BudgetCost, CycleBudget, ExecutionBudget, StopReason, TokenBudget};
use proptest::prelude::*;

fn arb_cost() -> impl Strategy<Value = BudgetCost> {
    (0u64..20, 0u64..20, 0u64..200).prop_map(|(cycles, facts, tokens)| BudgetCost {
        cycles,
        facts,
        tokens,
    })
}

proptest! {
    #[test]
    fn single_budget_never_partially_consumes(limit in 0u64..100, amounts in prop::collection::vec(0u64..40, 1..30)) {
        let budget = TokenBudget::new(limit);
        let mut expected = 0u64;
        for amount in amounts {
            let before = budget.consumed();
            if budget.try_reserve(amount) {
                expected += amount;
                prop_assert_eq!(budget.consumed(), before + amount);
            } else {
                prop_assert_eq!(budget.consumed(), before);
            }
            prop_assert!(budget.consumed() <= limit);
        }
        prop_assert_eq!(budget.consumed(), expected);
    }

    #[test]
    fn exact_remaining_succeeds_then_exhausted(limit in 1u64..1000) {
        let budget = CycleBudget::new(limit);
        prop_assert!(budget.try_reserve(limit));
        prop_assert!(budget.exhausted());
        prop_assert!(!budget.try_reserve(1));
        prop_assert_eq!(budget.consumed(), limit);
    }

    #[test]
    fn one_more_than_remaining_fails_cleanly(limit in 1u64..1000, taken in 0u64..1000) {
        let taken = taken.min(limit);
        let budget = CycleBudget::new(limit);
        prop_assert!(budget.try_reserve(taken));
        let over = budget.remaining() + 1;
        prop_assert!(!budget.try_reserve(over));
        prop_assert_eq!(budget.consumed(), taken);
    }

    #[test]
    fn composed_reserve_is_all_or_nothing(
        cycle_limit in 0u64..30,
        fact_limit in 0u64..30,
        token_limit in 0u64..300,
        costs in prop::collection::vec(arb_cost(), 1..25),
    ) {
        let budget = ExecutionBudget::unlimited()
            .with_cycle_limit(cycle_limit)
            .with_fact_limit(fact_limit)
            .with_token_limit(token_limit);

        for cost in costs {
            let before = (
                budget.cycles().unwrap().consumed(),
                budget.facts().unwrap().consumed(),
                budget.tokens().unwrap().consumed(),
            );
            match budget.try_reserve(cost) {
                Ok(()) => {
                    prop_assert_eq!(budget.cycles().unwrap().consumed(), before.0 + cost.cycles);
                    prop_assert_eq!(budget.facts().unwrap().consumed(), before.1 + cost.facts);
                    prop_assert_eq!(budget.tokens().unwrap().consumed(), before.2 + cost.tokens);
                }
                Err(reason) => {
                    prop_assert!(reason.is_budget_exhaustion());
                    prop_assert_eq!(budget.cycles().unwrap().consumed(), before.0);
                    prop_assert_eq!(budget.facts().unwrap().consumed(), before.1);
                    prop_assert_eq!(budget.tokens().unwrap().consumed(), before.2);
                }
            }
        }
    }

    #[test]
    fn check_reports_first_exhausted_with_numbers(limit in 1u64..50) {
        let budget = ExecutionBudget::unlimited().with_cycle_limit(limit);
        for _ in 0..limit {
            prop_assert!(budget.charge_cycle().is_ok());
        }
        prop_assert_eq!(
            budget.check(),
            Some(StopReason::CycleBudgetExhausted { consumed: limit, limit })
        );
    }
}
