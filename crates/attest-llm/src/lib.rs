//! Chat and embedding capability contracts.
//!
//! Chat and Embed are separate traits because providers often support only
//! one; the [`Llm`] umbrella is satisfied automatically by anything
//! implementing both. Every contract comes in two call styles over the
//! same implementation:
//!
//! - the static form ([`ChatProvider`], [`EmbedProvider`]) uses
//!   return-position `impl Future` — zero indirection when the backend is
//!   known at compile time;
//! - the dynamic form ([`ChatProviderDyn`], [`EmbedProviderDyn`]) is
//!   object-safe for runtime-selected or heterogeneous backends, and is
//!   derived from any static implementation by a blanket adapter.
//!
//! All implementations must be safely callable from multiple concurrent
//! callers (`&self` receivers, `Send + Sync` bounds). Failures resolve to
//! [`LlmError`], which implements the shared [`attest_error::CapabilityError`]
//! classification contract.

#![deny(unsafe_code)]

pub mod chat;
pub mod embed;
pub mod error;
pub mod mocks;
pub mod types;

pub use chat::{ChatProvider, ChatProviderDyn, DynChatProvider};
pub use embed::{DynEmbedProvider, EmbedProvider, EmbedProviderDyn};
pub use error::LlmError;
pub use types::{ChatMessage, ChatRequest, ChatResponse, EmbedRequest, EmbedResponse, Role, TokenUsage};

/// Umbrella contract: anything that both chats and embeds.
///
/// Never implemented by hand — the blanket impl covers every type
/// implementing both halves.
pub trait Llm: ChatProvider + EmbedProvider {}

impl<T: ChatProvider + EmbedProvider> Llm for T {}

/// Dynamic-dispatch umbrella, blanket-derived the same way.
pub trait LlmDyn: ChatProviderDyn + EmbedProviderDyn {}

impl<T: ChatProviderDyn + EmbedProviderDyn + ?Sized> LlmDyn for T {}
