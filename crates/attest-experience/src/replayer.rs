use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use attest_types::SequenceNo;
use futures::stream::BoxStream;

use crate::error::ExperienceError;
use crate::types::{ExperienceEvent, ReplayRange};

/// An ordered stream of replayed events.
pub type EventStream = BoxStream<'static, Result<(SequenceNo, ExperienceEvent), ExperienceError>>;

/// Replay authority — static dispatch form.
///
/// Replay is range-scoped and ordered by sequence number; `get` is the
/// point-query companion. Replay authority is distinct from append
/// authority and the two are granted independently.
pub trait ExperienceReplayer: Send + Sync {
    fn replay(
        &self,
        range: ReplayRange,
    ) -> impl Future<Output = Result<EventStream, ExperienceError>> + Send;

    fn get(
        &self,
        seq: SequenceNo,
    ) -> impl Future<Output = Result<Option<ExperienceEvent>, ExperienceError>> + Send;
}

/// Replay authority — object-safe form, blanket-derived.
#[async_trait]
pub trait ExperienceReplayerDyn: Send + Sync {
    async fn replay_dyn(&self, range: ReplayRange) -> Result<EventStream, ExperienceError>;
    async fn get_dyn(&self, seq: SequenceNo) -> Result<Option<ExperienceEvent>, ExperienceError>;
}

#[async_trait]
impl<T: ExperienceReplayer> ExperienceReplayerDyn for T {
    async fn replay_dyn(&self, range: ReplayRange) -> Result<EventStream, ExperienceError> {
        self.replay(range).await
    }

    async fn get_dyn(&self, seq: SequenceNo) -> Result<Option<ExperienceEvent>, ExperienceError> {
        self.get(seq).await
    }
}

/// A runtime-selected replay backend.
pub type DynExperienceReplayer = Arc<dyn ExperienceReplayerDyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryExperienceLog;
    use crate::ExperienceAppender;
    use attest_types::TraceLink;
    use chrono::Utc;
    use futures::TryStreamExt;

    async fn seeded_log(n: u64) -> InMemoryExperienceLog {
        let log = InMemoryExperienceLog::new();
        for i in 0..n {
            log.append(ExperienceEvent::new(
                "observed",
                "seed",
                serde_json::json!({"i": i}),
                TraceLink::local("t", format!("s-{i}")),
                Utc::now(),
            ))
            .await
            .unwrap();
        }
        log
    }

    #[tokio::test]
    async fn replay_is_ordered_and_range_scoped() {
        let log = seeded_log(10).await;
        let stream = log
            .replay(ReplayRange::bounded(SequenceNo(3), SequenceNo(7)))
            .await
            .unwrap();
        let events: Vec<_> = stream.try_collect().await.unwrap();

        let seqs: Vec<u64> = events.iter().map(|(seq, _)| seq.0).collect();
        assert_eq!(seqs, vec![3, 4, 5, 6]);
    }

    #[tokio::test]
    async fn open_range_replays_to_head() {
        let log = seeded_log(4).await;
        let stream = log.replay(ReplayRange::all()).await.unwrap();
        let events: Vec<_> = stream.try_collect().await.unwrap();
        assert_eq!(events.len(), 4);
    }

    #[tokio::test]
    async fn inverted_range_is_invalid() {
        let log = seeded_log(4).await;
        let err = log
            .replay(ReplayRange::bounded(SequenceNo(3), SequenceNo(1)))
            .await
            .err()
            .unwrap();
        assert!(matches!(err, ExperienceError::InvalidRange { .. }));
    }

    #[tokio::test]
    async fn point_query() {
        let log = seeded_log(2).await;
        let event = log.get(SequenceNo(1)).await.unwrap().unwrap();
        assert_eq!(event.payload["i"], 1);
        assert!(log.get(SequenceNo(99)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn dyn_replayer_streams_the_same_events() {
        let log = seeded_log(3).await;
        let replayer: DynExperienceReplayer = Arc::new(log);
        let stream = replayer.replay_dyn(ReplayRange::all()).await.unwrap();
        let events: Vec<_> = stream.try_collect().await.unwrap();
        assert_eq!(events.len(), 3);
    }
}
