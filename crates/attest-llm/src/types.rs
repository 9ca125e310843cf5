use attest_provenance::CallTrace;
use serde::{Deserialize, Serialize};

/// Message author role.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of a chat conversation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub content: String,
    pub role: Role,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::System,
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::User,
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            role: Role::Assistant,
        }
    }
}

/// A chat completion request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub max_tokens: Option<u32>,
    pub messages: Vec<ChatMessage>,
    pub temperature: Option<f64>,
}

impl ChatRequest {
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            max_tokens: None,
            messages,
            temperature: None,
        }
    }
}

/// Token accounting for budget enforcement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub completion_tokens: u64,
    pub prompt_tokens: u64,
}

impl TokenUsage {
    pub fn total(&self) -> u64 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// A chat completion response with its provenance trace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub content: String,
    pub trace: CallTrace,
    pub usage: TokenUsage,
}

/// An embedding request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbedRequest {
    pub inputs: Vec<String>,
}

impl EmbedRequest {
    pub fn single(input: impl Into<String>) -> Self {
        Self {
            inputs: vec![input.into()],
        }
    }
}

/// An embedding response: one vector per input, in order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbedResponse {
    pub trace: CallTrace,
    pub usage: TokenUsage,
    pub vectors: Vec<Vec<f32>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_totals() {
        let usage = TokenUsage {
            completion_tokens: 10,
            prompt_tokens: 32,
        };
        assert_eq!(usage.total(), 42);
    }

    #[test]
    fn chat_request_json_keys_alphabetical() {
        let req = ChatRequest::new(vec![ChatMessage::user("hi")]);
        let json = serde_json::to_string(&req).unwrap();
        let max = json.find("\"max_tokens\"").unwrap();
        let msgs = json.find("\"messages\"").unwrap();
        let temp = json.find("\"temperature\"").unwrap();
        assert!(max < msgs && msgs < temp);
    }
}
