use serde::{Deserialize, Serialize};

/// The closed error taxonomy.
///
/// Every capability-specific error maps onto exactly one category. The set
/// is deliberately closed: backends may invent error *types*, never error
/// *categories*.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCategory {
    /// The operation did not complete within its deadline.
    Timeout,
    /// The backend refused the call to shed load.
    RateLimit,
    /// Authentication or authorization failed.
    Auth,
    /// The request itself is malformed or out of contract.
    InvalidInput,
    /// The addressed entity does not exist.
    NotFound,
    /// Optimistic-concurrency or uniqueness conflict; the caller must
    /// change something before retrying.
    Conflict,
    /// The backend is reachable in principle but cannot serve right now.
    Unavailable,
    /// A kernel invariant was violated. Always fatal to the operation,
    /// never auto-retried.
    InvariantViolation,
    /// Unclassified backend failure.
    Internal,
}

impl ErrorCategory {
    /// Default transience: may the condition clear unprompted?
    pub fn default_transient(self) -> bool {
        matches!(
            self,
            ErrorCategory::Timeout | ErrorCategory::RateLimit | ErrorCategory::Unavailable
        )
    }

    /// Default retryability: is retrying sensible at all?
    ///
    /// Conflict is retryable (after the caller re-reads) but not transient.
    pub fn default_retryable(self) -> bool {
        matches!(
            self,
            ErrorCategory::Timeout
                | ErrorCategory::RateLimit
                | ErrorCategory::Unavailable
                | ErrorCategory::Conflict
        )
    }

    /// All nine categories, in declaration order.
    pub const ALL: [ErrorCategory; 9] = [
        ErrorCategory::Timeout,
        ErrorCategory::RateLimit,
        ErrorCategory::Auth,
        ErrorCategory::InvalidInput,
        ErrorCategory::NotFound,
        ErrorCategory::Conflict,
        ErrorCategory::Unavailable,
        ErrorCategory::InvariantViolation,
        ErrorCategory::Internal,
    ];
}

impl std::fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorCategory::Timeout => "timeout",
            ErrorCategory::RateLimit => "rate_limit",
            ErrorCategory::Auth => "auth",
            ErrorCategory::InvalidInput => "invalid_input",
            ErrorCategory::NotFound => "not_found",
            ErrorCategory::Conflict => "conflict",
            ErrorCategory::Unavailable => "unavailable",
            ErrorCategory::InvariantViolation => "invariant_violation",
            ErrorCategory::Internal => "internal",
        };
        f.write_str(name)
    }
}
