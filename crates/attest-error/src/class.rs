use serde::{Deserialize, Serialize};

use crate::category::ErrorCategory;

/// A serializable snapshot of an error's classification.
///
/// Carried in audit records and structured logs so an operator can act on
/// an unrecovered failure (category, flags, suggested delay) without
/// reading source. Fields are declared alphabetically for stable JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorClass {
    pub category: ErrorCategory,
    pub is_retryable: bool,
    pub is_transient: bool,
    pub retry_after_ms: Option<u64>,
}

impl std::fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (transient={}, retryable={})",
            self.category, self.is_transient, self.is_retryable
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_keys_are_alphabetical() {
        let class = ErrorClass {
            category: ErrorCategory::RateLimit,
            is_retryable: true,
            is_transient: true,
            retry_after_ms: Some(100),
        };
        let json = serde_json::to_string(&class).unwrap();
        let cat = json.find("\"category\"").unwrap();
        let retryable = json.find("\"is_retryable\"").unwrap();
        let transient = json.find("\"is_transient\"").unwrap();
        let after = json.find("\"retry_after_ms\"").unwrap();
        assert!(cat < retryable && retryable < transient && transient < after);
    }
}
