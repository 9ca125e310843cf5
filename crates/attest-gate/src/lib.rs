//! The promotion gate — lifecycle kernel enforcing the fact boundary.
//!
//! Untrusted, agent-produced proposals become immutable, audited facts
//! only through the explicit validate-then-promote protocol:
//!
//! ```text
//! Draft --validate(success)--> Validated --promote(success)--> Fact
//! ```
//!
//! ## Invariants
//!
//! - The `Validated` tag can only be produced by the internal lifecycle
//!   transition; no public constructor exists.
//! - A [`ValidationReport`] cannot be synthesized by calling code: it
//!   carries a proof token producible only inside this crate.
//! - Reports are bound to one proposal id and content hash; any mismatch
//!   at promotion is rejected with `InvariantViolation`.
//! - Each proposal promotes at most once; the consumption registry is
//!   atomic, so concurrent promotions cannot both win.
//! - Facts are terminal and append-only. The only exit is a separate
//!   [`CorrectionEvent`] + new fact pair referencing, never replacing,
//!   the original.

#![deny(unsafe_code)]

pub mod error;
pub mod fact;
pub mod ledger;
pub mod policy;
pub mod promoter;
pub mod proposal;
pub mod report;
pub mod validator;

pub use error::{LedgerError, PromoterError, ValidatorError};
pub use fact::{CorrectionEvent, Fact, PromotionContext, PromotionRecord};
pub use ledger::FactLedger;
pub use policy::{PolicyCheck, ValidationPolicy};
pub use promoter::Promoter;
pub use proposal::{Draft, LifecycleState, Proposal, ProposalContent, SubmittedProposal, Validated};
pub use report::{CheckResult, ValidationReport, ValidationSummary};
pub use validator::{ProposalCheck, ValidationOutcome, Validator};
