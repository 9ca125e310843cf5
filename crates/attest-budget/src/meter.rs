use std::sync::atomic::{AtomicU64, Ordering};

use crate::stop::StopReason;

/// Atomic reserve-and-check counter shared by all budget kinds.
#[derive(Debug)]
struct Meter {
    consumed: AtomicU64,
    limit: u64,
}

impl Meter {
    fn new(limit: u64) -> Self {
        Self {
            consumed: AtomicU64::new(0),
            limit,
        }
    }

    fn consumed(&self) -> u64 {
        self.consumed.load(Ordering::Acquire)
    }

    fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.consumed())
    }

    fn exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Reserve `amount` units. All-or-nothing: on insufficiency nothing is
    /// consumed. Compare-exchange loop so concurrent reservations cannot
    /// both take the last unit.
    fn try_reserve(&self, amount: u64) -> bool {
        let mut current = self.consumed.load(Ordering::Acquire);
        loop {
            let Some(next) = current.checked_add(amount) else {
                return false;
            };
            if next > self.limit {
                return false;
            }
            match self.consumed.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return true,
                Err(observed) => current = observed,
            }
        }
    }

    /// Undo a reservation made by `try_reserve` (composed-budget rollback).
    fn release(&self, amount: u64) {
        self.consumed.fetch_sub(amount, Ordering::AcqRel);
    }
}

macro_rules! budget {
    ($(#[$doc:meta])* $name:ident, $stop:ident) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $name(Meter);

        impl $name {
            pub fn new(limit: u64) -> Self {
                Self(Meter::new(limit))
            }

            pub fn limit(&self) -> u64 {
                self.0.limit
            }

            pub fn consumed(&self) -> u64 {
                self.0.consumed()
            }

            pub fn remaining(&self) -> u64 {
                self.0.remaining()
            }

            pub fn exhausted(&self) -> bool {
                self.0.exhausted()
            }

            /// All-or-nothing reservation; false on insufficiency.
            pub fn try_reserve(&self, amount: u64) -> bool {
                self.0.try_reserve(amount)
            }

            pub(crate) fn release(&self, amount: u64) {
                self.0.release(amount)
            }

            /// The stop reason reporting this budget's exhaustion.
            pub fn stop_reason(&self) -> StopReason {
                StopReason::$stop {
                    consumed: self.consumed(),
                    limit: self.limit(),
                }
            }
        }
    };
}

budget!(
    /// Ceiling on governing-loop cycles.
    CycleBudget,
    CycleBudgetExhausted
);
budget!(
    /// Ceiling on facts promoted in one run.
    FactBudget,
    FactBudgetExhausted
);
budget!(
    /// Ceiling on LLM tokens consumed in one run.
    TokenBudget,
    TokenBudgetExhausted
);
