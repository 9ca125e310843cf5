//! Test backends. These are the only concrete implementations this crate
//! ships; real providers live with collaborator crates.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use attest_provenance::{CallTrace, LocalTrace, SamplerParams};
use attest_types::{Blake3Hasher, ContentHasher};

use crate::error::LlmError;
use crate::types::{ChatRequest, ChatResponse, EmbedRequest, EmbedResponse, TokenUsage};
use crate::{ChatProvider, EmbedProvider};

fn mock_trace() -> CallTrace {
    CallTrace::Local(LocalTrace {
        adapter_hash: None,
        model_hash: Blake3Hasher.hash(b"mock-model"),
        sampler: SamplerParams::default(),
        seed: Some(0),
        tokenizer_hash: Blake3Hasher.hash(b"mock-tokenizer"),
    })
}

/// Mock chat backend returning a fixed reply and counting calls.
pub struct MockChat {
    reply: String,
    calls: AtomicU64,
}

impl MockChat {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            calls: AtomicU64::new(0),
        }
    }

    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::Relaxed)
    }
}

impl ChatProvider for MockChat {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        if request.messages.is_empty() {
            return Err(LlmError::InvalidRequest("no messages".into()));
        }
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(ChatResponse {
            content: self.reply.clone(),
            trace: mock_trace(),
            usage: TokenUsage {
                completion_tokens: self.reply.split_whitespace().count() as u64,
                prompt_tokens: request
                    .messages
                    .iter()
                    .map(|m| m.content.split_whitespace().count() as u64)
                    .sum(),
            },
        })
    }
}

/// Mock chat backend that always fails with a configured error.
pub struct FailingChat {
    make_error: fn() -> LlmError,
}

impl FailingChat {
    pub fn rate_limited() -> Self {
        Self {
            make_error: || LlmError::RateLimited {
                retry_after: Some(Duration::from_millis(100)),
            },
        }
    }

    pub fn unavailable() -> Self {
        Self {
            make_error: || LlmError::Unavailable("mock outage".into()),
        }
    }
}

impl ChatProvider for FailingChat {
    async fn chat(&self, _request: ChatRequest) -> Result<ChatResponse, LlmError> {
        Err((self.make_error)())
    }
}

/// Mock embedding backend producing fixed-dimension vectors.
pub struct MockEmbed {
    dimension: usize,
}

impl MockEmbed {
    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }
}

impl EmbedProvider for MockEmbed {
    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError> {
        if request.inputs.is_empty() {
            return Err(LlmError::InvalidRequest("no inputs".into()));
        }
        let vectors = request
            .inputs
            .iter()
            .map(|input| {
                // Deterministic per input so tests can compare.
                let hash = Blake3Hasher.hash(input.as_bytes());
                (0..self.dimension)
                    .map(|i| hash.0[i % 32] as f32 / 255.0)
                    .collect()
            })
            .collect();
        Ok(EmbedResponse {
            trace: mock_trace(),
            usage: TokenUsage {
                completion_tokens: 0,
                prompt_tokens: request.inputs.len() as u64,
            },
            vectors,
        })
    }
}

/// Mock backend implementing both halves, so the `Llm` umbrella applies.
pub struct MockLlm {
    chat: MockChat,
    embed: MockEmbed,
}

impl MockLlm {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            chat: MockChat::replying(reply),
            embed: MockEmbed::with_dimension(8),
        }
    }
}

impl ChatProvider for MockLlm {
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.chat.chat(request).await
    }
}

impl EmbedProvider for MockLlm {
    async fn embed(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError> {
        self.embed.embed(request).await
    }
}
