use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use attest_types::SequenceNo;

use crate::error::ExperienceError;
use crate::types::ExperienceEvent;

/// Append-only ingestion authority — static dispatch form.
///
/// Returns the sequence number assigned to the event. There is no update
/// or delete; the log only grows.
pub trait ExperienceAppender: Send + Sync {
    fn append(
        &self,
        event: ExperienceEvent,
    ) -> impl Future<Output = Result<SequenceNo, ExperienceError>> + Send;
}

/// Append authority — object-safe form, blanket-derived.
#[async_trait]
pub trait ExperienceAppenderDyn: Send + Sync {
    async fn append_dyn(&self, event: ExperienceEvent) -> Result<SequenceNo, ExperienceError>;
}

#[async_trait]
impl<T: ExperienceAppender> ExperienceAppenderDyn for T {
    async fn append_dyn(&self, event: ExperienceEvent) -> Result<SequenceNo, ExperienceError> {
        self.append(event).await
    }
}

/// A runtime-selected append backend.
pub type DynExperienceAppender = Arc<dyn ExperienceAppenderDyn>;
