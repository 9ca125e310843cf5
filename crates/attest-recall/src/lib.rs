//! Recall capability contracts.
//!
//! Read and write are distinct governance boundaries, so the contract is
//! split by authority: [`RecallReader`] is query-only and is the only
//! capability handed to execution contexts that must be statically limited
//! to reads; [`RecallWriter`] adds store/delete authority. The [`Recall`]
//! umbrella is blanket-derived for backends implementing both.
//!
//! As with every capability, each contract has a zero-indirection static
//! form and an object-safe `*Dyn` form derived by a blanket adapter.

#![deny(unsafe_code)]

pub mod error;
pub mod mocks;
pub mod reader;
pub mod types;
pub mod writer;

pub use error::RecallError;
pub use reader::{DynRecallReader, RecallReader, RecallReaderDyn};
pub use types::{RecallEntry, RecallHit, RecallQuery};
pub use writer::{DynRecallWriter, RecallWriter, RecallWriterDyn};

/// Umbrella contract: full recall authority (read + write).
pub trait Recall: RecallReader + RecallWriter {}

impl<T: RecallReader + RecallWriter> Recall for T {}

/// Dynamic-dispatch umbrella.
pub trait RecallDyn: RecallReaderDyn + RecallWriterDyn {}

impl<T: RecallReaderDyn + RecallWriterDyn + ?Sized> RecallDyn for T {}
