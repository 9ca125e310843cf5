use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::LlmError;
use crate::types::{ChatRequest, ChatResponse};

/// Chat capability — static dispatch form.
///
/// Implementations must be callable from multiple concurrent callers; the
/// receiver is `&self` and internal state is the backend's own concern.
pub trait ChatProvider: Send + Sync {
    fn chat(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ChatResponse, LlmError>> + Send;
}

/// Chat capability — object-safe dynamic dispatch form.
///
/// Blanket-derived from every [`ChatProvider`]; never implemented by hand.
#[async_trait]
pub trait ChatProviderDyn: Send + Sync {
    async fn chat_dyn(&self, request: ChatRequest) -> Result<ChatResponse, LlmError>;
}

#[async_trait]
impl<T: ChatProvider> ChatProviderDyn for T {
    async fn chat_dyn(&self, request: ChatRequest) -> Result<ChatResponse, LlmError> {
        self.chat(request).await
    }
}

/// A runtime-selected chat backend.
pub type DynChatProvider = Arc<dyn ChatProviderDyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::MockChat;
    use crate::types::ChatMessage;

    async fn call_static(provider: &impl ChatProvider) -> ChatResponse {
        provider
            .chat(ChatRequest::new(vec![ChatMessage::user("ping")]))
            .await
            .unwrap()
    }

    async fn call_dynamic(provider: &DynChatProvider) -> ChatResponse {
        provider
            .chat_dyn(ChatRequest::new(vec![ChatMessage::user("ping")]))
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn same_backend_serves_both_call_styles() {
        let mock = MockChat::replying("pong");

        let via_static = call_static(&mock).await;
        assert_eq!(via_static.content, "pong");

        let via_dyn: DynChatProvider = Arc::new(mock);
        let response = call_dynamic(&via_dyn).await;
        assert_eq!(response.content, "pong");
    }

    #[tokio::test]
    async fn dynamic_form_supports_heterogeneous_backends() {
        let backends: Vec<DynChatProvider> = vec![
            Arc::new(MockChat::replying("alpha")),
            Arc::new(MockChat::replying("beta")),
        ];

        let mut replies = Vec::new();
        for backend in &backends {
            replies.push(call_dynamic(backend).await.content);
        }
        assert_eq!(replies, vec!["alpha", "beta"]);
    }

    #[tokio::test]
    async fn concurrent_callers_share_one_backend() {
        let backend = Arc::new(MockChat::replying("ok"));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let backend = Arc::clone(&backend);
            handles.push(tokio::spawn(async move {
                backend
                    .chat(ChatRequest::new(vec![ChatMessage::user("x")]))
                    .await
                    .unwrap()
                    .content
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap(), "ok");
        }
    }
}
