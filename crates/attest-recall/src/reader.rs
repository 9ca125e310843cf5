use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RecallError;
use crate::types::{RecallHit, RecallQuery};

/// Query-only recall authority — static dispatch form.
///
/// Execution contexts that must never write take this trait (or its dyn
/// form) and nothing else; the type system carries the governance
/// boundary.
pub trait RecallReader: Send + Sync {
    fn query(
        &self,
        query: RecallQuery,
    ) -> impl Future<Output = Result<Vec<RecallHit>, RecallError>> + Send;
}

/// Query-only recall authority — object-safe form, blanket-derived.
#[async_trait]
pub trait RecallReaderDyn: Send + Sync {
    async fn query_dyn(&self, query: RecallQuery) -> Result<Vec<RecallHit>, RecallError>;
}

#[async_trait]
impl<T: RecallReader> RecallReaderDyn for T {
    async fn query_dyn(&self, query: RecallQuery) -> Result<Vec<RecallHit>, RecallError> {
        self.query(query).await
    }
}

/// A runtime-selected read-only recall backend.
pub type DynRecallReader = Arc<dyn RecallReaderDyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::InMemoryRecall;
    use crate::types::RecallEntry;
    use crate::RecallWriter;

    /// A read-only context: statically cannot store or delete.
    async fn read_only_context(reader: &impl RecallReader) -> usize {
        reader
            .query(RecallQuery::text("deploy"))
            .await
            .unwrap()
            .len()
    }

    #[tokio::test]
    async fn reader_bound_limits_context_to_queries() {
        let store = InMemoryRecall::new();
        store
            .store(RecallEntry::new("deploy notes"))
            .await
            .unwrap();
        store
            .store(RecallEntry::new("unrelated"))
            .await
            .unwrap();

        assert_eq!(read_only_context(&store).await, 1);
    }

    #[tokio::test]
    async fn dyn_reader_hides_writer_authority() {
        let store = InMemoryRecall::new();
        store.store(RecallEntry::new("deploy")).await.unwrap();

        let reader: DynRecallReader = Arc::new(store);
        let hits = reader.query_dyn(RecallQuery::text("deploy")).await.unwrap();
        assert_eq!(hits.len(), 1);
    }

    #[tokio::test]
    async fn limit_and_tag_are_honored() {
        let store = InMemoryRecall::new();
        for i in 0..5 {
            store
                .store(RecallEntry::new(format!("note {i}")).with_tags(vec!["ops".into()]))
                .await
                .unwrap();
        }
        store
            .store(RecallEntry::new("note untagged"))
            .await
            .unwrap();

        let hits = store
            .query(RecallQuery::text("note").with_tag("ops").with_limit(3))
            .await
            .unwrap();
        assert_eq!(hits.len(), 3);
        assert!(hits.iter().all(|h| h.entry.tags.contains(&"ops".to_string())));
    }
}
