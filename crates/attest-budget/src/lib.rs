//! Resource budgets and stop reasons.
//!
//! Budgets are ceilings, not errors: running out is a normal, successful
//! termination reported through [`StopReason`], explicitly distinguished
//! from failure paths. Each budget reserves atomically — `try_reserve`
//! either consumes the full amount or consumes nothing, so two concurrent
//! cycles can never both take the last unit.
//!
//! [`ExecutionBudget`] composes the cycle, fact and token ceilings; a
//! governing loop checks it once per cycle and halts with the matching
//! [`StopReason`] (carrying consumed and limit, never a bare boolean) on
//! the first exhaustion.

#![deny(unsafe_code)]

pub mod execution;
pub mod meter;
pub mod stop;

pub use execution::{BudgetCost, ExecutionBudget};
pub use meter::{CycleBudget, FactBudget, TokenBudget};
pub use stop::StopReason;
