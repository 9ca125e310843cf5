use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use attest_types::EntryId;

use crate::error::RecallError;
use crate::types::RecallEntry;

/// Write recall authority — static dispatch form.
///
/// Separate from [`crate::RecallReader`] because store/delete authority is
/// a governance boundary in its own right.
pub trait RecallWriter: Send + Sync {
    fn store(
        &self,
        entry: RecallEntry,
    ) -> impl Future<Output = Result<EntryId, RecallError>> + Send;

    /// Returns true if the entry existed.
    fn delete(&self, id: EntryId) -> impl Future<Output = Result<bool, RecallError>> + Send;
}

/// Write recall authority — object-safe form, blanket-derived.
#[async_trait]
pub trait RecallWriterDyn: Send + Sync {
    async fn store_dyn(&self, entry: RecallEntry) -> Result<EntryId, RecallError>;
    async fn delete_dyn(&self, id: EntryId) -> Result<bool, RecallError>;
}

#[async_trait]
impl<T: RecallWriter> RecallWriterDyn for T {
    async fn store_dyn(&self, entry: RecallEntry) -> Result<EntryId, RecallError> {
        self.store(entry).await
    }

    async fn delete_dyn(&self, id: EntryId) -> Result<bool, RecallError> {
        self.delete(id).await
    }
}

/// A runtime-selected recall write backend.
pub type DynRecallWriter = Arc<dyn RecallWriterDyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryRecall;
    use crate::types::RecallQuery;
    use crate::{Recall, RecallReader};

    #[tokio::test]
    async fn store_then_delete() {
        let store = InMemoryRecall::new();
        let id = store.store(RecallEntry::new("temp")).await.unwrap();

        assert!(store.delete(id).await.unwrap());
        // Second delete reports absence.
        assert!(!store.delete(id).await.unwrap());

        let hits = store.query(RecallQuery::text("temp")).await.unwrap();
        assert!(hits.is_empty());
    }

    #[tokio::test]
    async fn umbrella_covers_both_authorities() {
        async fn full_authority(recall: &impl Recall) {
            let id = recall.store(RecallEntry::new("claim")).await.unwrap();
            let hits = recall.query(RecallQuery::text("claim")).await.unwrap();
            assert_eq!(hits.len(), 1);
            assert_eq!(hits[0].id, id);
        }

        full_authority(&InMemoryRecall::new()).await;
    }
}
