use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{EmbedRequest, EmbedResponse};

/// Embedding capability — static dispatch form.
pub trait EmbedProvider: Send + Sync {
    fn embed(
        &self,
        request: EmbedRequest,
    ) -> impl Future<Output = Result<EmbedResponse, LlmError>> + Send;
}

/// Embedding capability — object-safe dynamic dispatch form,
/// blanket-derived from every [`EmbedProvider`].
#[async_trait]
pub trait EmbedProviderDyn: Send + Sync {
    async fn embed_dyn(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError>;
}

#[async_trait]
impl<T: EmbedProvider> EmbedProviderDyn for T {
    async fn embed_dyn(&self, request: EmbedRequest) -> Result<EmbedResponse, LlmError> {
        self.embed(request).await
    }
}

/// A runtime-selected embedding backend.
pub type DynEmbedProvider = Arc<dyn EmbedProviderDyn>;
