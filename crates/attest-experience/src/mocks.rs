//! In-memory experience log for tests.

use std::sync::RwLock;

use attest_types::SequenceNo;
use futures::stream;
use tracing::debug;

use crate::appender::ExperienceAppender;
use crate::error::ExperienceError;
use crate::replayer::{EventStream, ExperienceReplayer};
use crate::types::{ExperienceEvent, ReplayRange};

/// Vec-backed log. The position in the vector IS the sequence number, so
/// append-only discipline is structural.
pub struct InMemoryExperienceLog {
    events: RwLock<Vec<ExperienceEvent>>,
}

impl InMemoryExperienceLog {
    pub fn new() -> Self {
        Self {
            events: RwLock::new(Vec::new()),
        }
    }

    /// Sequence number the next append will receive.
    pub fn head(&self) -> SequenceNo {
        SequenceNo(self.events.read().map(|e| e.len() as u64).unwrap_or(0))
    }
}

impl Default for InMemoryExperienceLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ExperienceAppender for InMemoryExperienceLog {
    async fn append(&self, event: ExperienceEvent) -> Result<SequenceNo, ExperienceError> {
        let mut events = self
            .events
            .write()
            .map_err(|_| ExperienceError::Backend("poisoned lock".into()))?;
        let seq = SequenceNo(events.len() as u64);
        debug!(sequence = %seq, kind = %event.kind, "Event appended");
        events.push(event);
        Ok(seq)
    }
}

impl ExperienceReplayer for InMemoryExperienceLog {
    async fn replay(&self, range: ReplayRange) -> Result<EventStream, ExperienceError> {
        if let Some(to) = range.to {
            if to < range.from {
                return Err(ExperienceError::InvalidRange {
                    from: range.from,
                    to,
                });
            }
        }
        let events = self
            .events
            .read()
            .map_err(|_| ExperienceError::Backend("poisoned lock".into()))?;

        let snapshot: Vec<(SequenceNo, ExperienceEvent)> = events
            .iter()
            .enumerate()
            .map(|(i, event)| (SequenceNo(i as u64), event.clone()))
            .filter(|(seq, _)| range.contains(*seq))
            .collect();

        Ok(Box::pin(stream::iter(snapshot.into_iter().map(Ok))))
    }

    async fn get(&self, seq: SequenceNo) -> Result<Option<ExperienceEvent>, ExperienceError> {
        let events = self
            .events
            .read()
            .map_err(|_| ExperienceError::Backend("poisoned lock".into()))?;
        Ok(events.get(seq.0 as usize).cloned())
    }
}
