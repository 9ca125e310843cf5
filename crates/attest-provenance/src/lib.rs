//! Kernel-boundary provenance for LLM calls.
//!
//! Two provenance representations exist for two audiences. The lightweight
//! [`attest_types::TraceLink`] marks any evidence as locally-replayable or
//! remote/audit-only. This crate carries the richer [`CallTrace`] recorded
//! at the LLM boundary: a `Local` call pins the exact model, adapter and
//! tokenizer hashes plus seed and sampler parameters; a `Remote` call pins
//! the provider, model id and a request fingerprint.
//!
//! The two representations must never disagree on the replay verdict:
//! Local is replay-eligible, Remote is not, with zero exceptions. The
//! richer form additionally grades *how* eligible via [`Replayability`].

#![deny(unsafe_code)]

pub mod replay;
pub mod trace;

pub use replay::Replayability;
pub use trace::{CallTrace, LocalTrace, RemoteTrace, SamplerParams};
