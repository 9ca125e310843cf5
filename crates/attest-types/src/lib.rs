//! Shared type definitions for the attest kernel.
//!
//! No business logic — ids, provenance markers, actors, evidence
//! references, canonical serialization, and the clock/hash seams the
//! hosting runtime injects. Every attest crate depends on this crate.

#![deny(unsafe_code)]

pub mod actor;
pub mod canonical;
pub mod clock;
pub mod evidence;
pub mod hash;
pub mod ids;
pub mod persist;
pub mod trace;

pub use actor::Actor;
pub use canonical::{canonical_json, canonical_json_bytes};
pub use clock::{Clock, FixedClock, SystemClock};
pub use evidence::EvidenceRef;
pub use hash::{Blake3Hasher, ContentHash, ContentHasher};
pub use ids::{CorrectionId, EntryId, FactId, PolicyId, ProposalId, ReportId, SequenceNo};
pub use persist::{Persisted, PersistSchema};
pub use trace::TraceLink;
