//! Experience log capability contracts.
//!
//! The experience log is the system's append-only record of what happened.
//! Append authority is a hard governance boundary distinct from replay
//! authority, so the contract is split:
//!
//! - [`ExperienceAppender`] — append-only ingestion; there is no update or
//!   delete anywhere on the surface.
//! - [`ExperienceReplayer`] — range-scoped streaming replay plus point
//!   query by sequence number.
//!
//! Replay is ordered by [`attest_types::SequenceNo`]; streams are
//! `BoxStream` so the dynamic form stays object-safe.

#![deny(unsafe_code)]

pub mod appender;
pub mod error;
pub mod mocks;
pub mod replayer;
pub mod types;

pub use appender::{DynExperienceAppender, ExperienceAppender, ExperienceAppenderDyn};
pub use error::ExperienceError;
pub use replayer::{
    DynExperienceReplayer, EventStream, ExperienceReplayer, ExperienceReplayerDyn,
};
pub use types::{ExperienceEvent, ReplayRange};
